use super::Catalog;

// (profession, role, tags)
const SNAPSHOT: &[(&str, &str, &[&str])] = &[
    ("Guardian", "heal", &["aegis", "protection", "stability", "condition_cleanse", "regeneration"]),
    ("Guardian", "quickness", &["quickness", "might", "stability", "aegis"]),
    ("Guardian", "support", &["stability", "aegis", "protection", "resolution"]),
    ("Guardian", "dps", &["might", "fury"]),
    ("Warrior", "dps", &["might", "fury"]),
    ("Warrior", "quickness", &["quickness", "might", "fury", "resistance"]),
    ("Warrior", "bruiser", &["resistance", "stability"]),
    ("Revenant", "alacrity", &["alacrity", "might", "protection"]),
    ("Revenant", "quickness", &["quickness", "might", "fury"]),
    ("Revenant", "dps", &["might", "fury"]),
    ("Ranger", "heal", &["regeneration", "might", "fury", "protection"]),
    ("Ranger", "dps", &["might", "fury"]),
    ("Thief", "dps", &["stealth", "boon_rip"]),
    ("Thief", "bruiser", &["stealth", "condition_cleanse"]),
    ("Engineer", "alacrity", &["alacrity", "superspeed", "condition_cleanse"]),
    ("Engineer", "heal", &["regeneration", "superspeed", "condition_cleanse", "vigor"]),
    ("Engineer", "dps", &["might"]),
    ("Necromancer", "heal", &["barrier", "condition_cleanse", "resolution"]),
    ("Necromancer", "dps", &["boon_corrupt", "vulnerability"]),
    ("Necromancer", "bruiser", &["boon_corrupt", "barrier"]),
    ("Elementalist", "heal", &["regeneration", "condition_cleanse", "might", "vigor"]),
    ("Elementalist", "dps", &["might", "fury"]),
    ("Mesmer", "alacrity", &["alacrity", "stability", "reflection"]),
    ("Mesmer", "quickness", &["quickness", "stealth"]),
    ("Mesmer", "dps", &["boon_rip"]),
];

impl Catalog {
    /// The bundled profession snapshot used when no catalog file is given.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for (profession, role, tags) in SNAPSHOT {
            catalog.insert(profession, role, tags.iter().copied());
        }
        catalog
    }
}
