//! The default English vocabulary.

use super::config::{ContextualConfig, GrammarConfig, LexiconConfig};

/// Verb synonyms in table order. Within a verb, phrases are listed most
/// common first.
const VERBS: &[(&str, &[&str])] = &[
    // Movement
    ("move", &["go", "move", "walk", "travel", "head", "proceed"]),
    ("enter", &["enter", "step into"]),
    ("exit", &["exit", "depart"]),
    // Looking and examining
    (
        "look",
        &[
            "look", "l", "examine", "x", "inspect", "check", "view", "observe", "see", "study",
            "describe", "look at", "look around", "peer at", "gaze at",
        ],
    ),
    ("read", &["read", "peruse", "scan"]),
    ("search", &["search", "seek", "find", "hunt for", "look for"]),
    // Taking and dropping
    (
        "get",
        &[
            "get", "take", "grab", "acquire", "obtain", "collect", "lift", "snatch", "pick up",
        ],
    ),
    ("drop", &["drop", "discard", "release", "abandon", "dump", "put down"]),
    ("put", &["put", "place", "set", "insert", "stow"]),
    (
        "inventory",
        &["inventory", "i", "inv", "items", "possessions", "belongings"],
    ),
    // Equipment
    ("equip", &["equip", "wear", "wield", "don", "arm", "put on"]),
    ("unequip", &["unequip", "remove", "doff", "unwield", "take off"]),
    // Combat
    (
        "attack",
        &[
            "attack", "fight", "hit", "strike", "kill", "slay", "battle", "assault", "hurt",
            "punch", "kick", "stab",
        ],
    ),
    ("flee", &["flee", "escape", "retreat", "run away"]),
    // Interaction
    ("talk", &["talk", "speak", "chat", "converse", "say", "ask"]),
    ("give", &["give", "offer", "hand", "present"]),
    ("trade", &["trade", "barter", "exchange", "swap"]),
    ("buy", &["buy", "purchase"]),
    ("sell", &["sell"]),
    // Using items
    (
        "use",
        &["use", "utilize", "employ", "activate", "apply", "combine"],
    ),
    ("open", &["open", "unlock", "unfasten"]),
    ("close", &["close", "shut", "lock", "fasten"]),
    ("drink", &["drink", "sip", "quaff", "gulp"]),
    ("eat", &["eat", "consume", "devour", "munch"]),
    // Information
    ("status", &["status", "stats", "condition", "health"]),
    ("help", &["help", "?", "commands", "instructions"]),
    (
        "quests",
        &["quests", "quest", "missions", "tasks", "objectives", "journal"],
    ),
    // Party
    ("recruit", &["recruit", "hire", "enlist", "invite", "add to party"]),
    (
        "dismiss",
        &["dismiss", "fire", "send away", "remove from party"],
    ),
    ("party", &["party", "companions", "group", "team", "followers"]),
    (
        "party_order",
        &["order", "tell", "command", "instruct", "direct"],
    ),
    (
        "gather",
        &["gather", "reunite", "regroup", "collect party"],
    ),
];

/// (surface, bare, with argument, in combat)
const CONTEXTUAL: &[(&str, &str, &str, Option<&str>)] = &[
    ("leave", "exit", "drop", None),
    ("run", "move", "move", Some("flee")),
];

const DIRECTIONS: &[(&str, &[&str])] = &[
    ("north", &["north", "n", "northward", "northwards"]),
    ("south", &["south", "s", "southward", "southwards"]),
    ("east", &["east", "e", "eastward", "eastwards"]),
    ("west", &["west", "w", "westward", "westwards"]),
    ("northeast", &["northeast", "ne", "north-east"]),
    ("northwest", &["northwest", "nw", "north-west"]),
    ("southeast", &["southeast", "se", "south-east"]),
    ("southwest", &["southwest", "sw", "south-west"]),
    ("up", &["up", "u", "upward", "upwards", "upstairs"]),
    ("down", &["down", "d", "downward", "downwards", "downstairs"]),
    ("in", &["in", "inside", "inward", "inwards"]),
    ("out", &["out", "outside", "outward", "outwards"]),
];

const MOVEMENT_SKIP: &[&str] = &["to", "toward", "towards", "through", "into"];

/// (verb, skip, separators, topics)
const GRAMMAR: &[(&str, &[&str], &[&str], &[&str])] = &[
    ("move", MOVEMENT_SKIP, &[], &[]),
    ("enter", MOVEMENT_SKIP, &[], &[]),
    ("exit", &["through", "from"], &[], &[]),
    ("look", &["at", "in", "into", "inside"], &[], &[]),
    ("search", &["in", "through", "for"], &[], &[]),
    ("get", &[], &["from"], &[]),
    ("put", &[], &["in", "into", "on", "onto", "inside"], &[]),
    ("attack", &[], &["with"], &[]),
    ("talk", &["to", "with"], &[], &["about"]),
    ("give", &[], &["to"], &[]),
    ("trade", &["with"], &["for", "with"], &[]),
    ("buy", &[], &["from"], &[]),
    ("sell", &[], &["to"], &[]),
    ("use", &[], &["on", "with", "onto"], &[]),
    ("open", &[], &["with"], &[]),
    ("party_order", &[], &["to"], &[]),
];

const ARTICLES: &[&str] = &["the", "a", "an"];

const FILLERS: &[&str] = &[
    "please",
    "can i",
    "could i",
    "i want to",
    "i would like to",
    "let me",
    "try to",
];

const PRONOUNS: &[&str] = &["him", "her", "them"];

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Build the default English configuration.
pub fn config() -> LexiconConfig {
    LexiconConfig {
        extend_builtin: false,
        verbs: VERBS
            .iter()
            .map(|(verb, surfaces)| ((*verb).to_string(), strings(surfaces)))
            .collect(),
        contextual: CONTEXTUAL
            .iter()
            .map(|(surface, bare, with_argument, in_combat)| {
                (
                    (*surface).to_string(),
                    ContextualConfig {
                        bare: (*bare).to_string(),
                        with_argument: (*with_argument).to_string(),
                        in_combat: in_combat.map(str::to_string),
                    },
                )
            })
            .collect(),
        directions: DIRECTIONS
            .iter()
            .map(|(dir, surfaces)| ((*dir).to_string(), strings(surfaces)))
            .collect(),
        grammar: GRAMMAR
            .iter()
            .map(|(verb, skip, separators, topics)| {
                (
                    (*verb).to_string(),
                    GrammarConfig {
                        skip: strings(skip),
                        separators: strings(separators),
                        topics: strings(topics),
                    },
                )
            })
            .collect(),
        articles: strings(ARTICLES),
        fillers: strings(FILLERS),
        pronouns: strings(PRONOUNS),
    }
}
