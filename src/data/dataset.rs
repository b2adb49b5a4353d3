//! Compiled-in case content: the mansion map and the clue → suspect table

use super::mansion::RoomPlan;

pub const CLUE_MUDDY_BOOT: &str = "Uma bota suja de lama foi deixada perto da porta.";
pub const CLUE_WARM_TEA: &str = "Ha uma xicara de cha ainda morna sobre a mesa.";
pub const CLUE_POISON_BOOK: &str = "Um livro sobre venenos esta fora do lugar.";
pub const CLUE_CLEAN_KNIVES: &str = "Facas foram limpas recentemente.";
pub const CLUE_CRUMPLED_LETTER: &str = "Uma carta amassada esta na lixeira.";
pub const CLUE_PIANO_WIRE: &str = "Uma corda de piano esta arrebentada.";

/// Everyone the player may accuse
pub const SUSPECTS: &[&str] = &["Mordomo", "Cozinheiro", "Governanta", "Jardineiro"];

/// Which suspect each clue points at
pub const SUSPECT_TABLE: &[(&str, &str)] = &[
    (CLUE_MUDDY_BOOT, "Mordomo"),
    (CLUE_WARM_TEA, "Mordomo"),
    (CLUE_CLEAN_KNIVES, "Cozinheiro"),
    (CLUE_POISON_BOOK, "Governanta"),
    (CLUE_CRUMPLED_LETTER, "Governanta"),
    (CLUE_PIANO_WIRE, "Jardineiro"),
];

static COZINHA: RoomPlan = RoomPlan::leaf("Cozinha", Some(CLUE_CLEAN_KNIVES));
static SALA_DE_MUSICA: RoomPlan = RoomPlan::leaf("Sala de Musica", Some(CLUE_PIANO_WIRE));
static ESCRITORIO: RoomPlan = RoomPlan::leaf("Escritorio", Some(CLUE_CRUMPLED_LETTER));

static JARDIM_DE_INVERNO: RoomPlan = RoomPlan {
    name: "Jardim de Inverno",
    clue: None,
    left: Some(&SALA_DE_MUSICA),
    right: None,
};

static SALA_DE_ESTAR: RoomPlan = RoomPlan {
    name: "Sala de Estar",
    clue: Some(CLUE_WARM_TEA),
    left: Some(&COZINHA),
    right: Some(&JARDIM_DE_INVERNO),
};

static BIBLIOTECA: RoomPlan = RoomPlan {
    name: "Biblioteca",
    clue: Some(CLUE_POISON_BOOK),
    left: None,
    right: Some(&ESCRITORIO),
};

/// The mansion, rooted at the entrance hall
///
/// ```text
///                 Hall de entrada
///                /               \
///        Sala de Estar         Biblioteca
///        /          \                  \
///    Cozinha   Jardim de Inverno     Escritorio
///                 /
///          Sala de Musica
/// ```
pub static MANSION_PLAN: RoomPlan = RoomPlan {
    name: "Hall de entrada",
    clue: Some(CLUE_MUDDY_BOOT),
    left: Some(&SALA_DE_ESTAR),
    right: Some(&BIBLIOTECA),
};
