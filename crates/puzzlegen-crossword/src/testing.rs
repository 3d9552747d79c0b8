use puzzlegen_core::WordEntry;
use puzzlegen_words::{StaticWordSupply, parse_word_list};

const GENERAL_KNOWLEDGE: &str = include_str!("../../../data/en/general-knowledge.txt");

pub(crate) fn general_knowledge() -> Vec<WordEntry> {
    parse_word_list(GENERAL_KNOWLEDGE)
}

pub(crate) fn general_knowledge_supply() -> StaticWordSupply {
    general_knowledge().into_iter().collect()
}
