use std::collections::HashMap;

/// Tier assigned to any team missing from the table. Keeps the lookup
/// total so downstream feature arithmetic never fails.
pub const DEFAULT_TIER: u8 = 2;

/// Liga MX hierarchy: 1 = elite, 2 = medium, 3 = low.
/// Fixed domain knowledge, not editable at runtime.
const LIGA_MX_TIERS: &[(&str, u8)] = &[
    ("Club América", 1),
    ("Tigres UANL", 1),
    ("Monterrey", 1),
    ("Cruz Azul", 1),
    ("Toluca FC", 1),
    ("Guadalajara", 2),
    ("Pachuca", 2),
    ("León", 2),
    ("Pumas UNAM", 2),
    ("Santos Laguna", 2),
    ("Tijuana", 3),
    ("Atlas", 3),
    ("Atlético de San Luis", 3),
    ("Necaxa", 3),
    ("Querétaro", 3),
    ("Puebla", 3),
    ("Juárez", 3),
    ("Mazatlán FC", 3),
];

/// Static team → strength tier lookup.
#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: HashMap<String, u8>,
}

impl TierTable {
    /// The fixed Liga MX table.
    pub fn liga_mx() -> Self {
        Self::from_entries(LIGA_MX_TIERS.iter().map(|(team, tier)| (team.to_string(), *tier)))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, u8)>) -> Self {
        Self {
            tiers: entries.into_iter().collect(),
        }
    }

    /// Tier for the given team; unknown teams resolve to [`DEFAULT_TIER`].
    pub fn tier_of(&self, team: &str) -> u8 {
        self.tiers.get(team).copied().unwrap_or(DEFAULT_TIER)
    }

    /// All known team names, sorted.
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = self.tiers.keys().map(String::as_str).collect();
        teams.sort_unstable();
        teams
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::liga_mx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elite_and_low_tiers_resolve() {
        let tiers = TierTable::liga_mx();
        assert_eq!(tiers.tier_of("Club América"), 1);
        assert_eq!(tiers.tier_of("Pachuca"), 2);
        assert_eq!(tiers.tier_of("Mazatlán FC"), 3);
    }

    #[test]
    fn unknown_team_defaults_to_medium() {
        let tiers = TierTable::liga_mx();
        assert_eq!(tiers.tier_of("Unknown FC"), 2);
    }

    #[test]
    fn table_covers_all_eighteen_clubs() {
        let tiers = TierTable::liga_mx();
        assert_eq!(tiers.teams().len(), 18);
    }

    #[test]
    fn accented_names_match_exactly() {
        let tiers = TierTable::liga_mx();
        assert_eq!(tiers.tier_of("Atlético de San Luis"), 3);
        assert_eq!(tiers.tier_of("Atletico de San Luis"), DEFAULT_TIER);
    }
}
