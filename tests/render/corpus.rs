//! Shared command corpus, written in explicit syntax.

use polyphrase_foundation::SemanticNode;
use polyphrase_parser::Engine;

pub const CORPUS: &[&str] = &[
    "[toggle patient:.active]",
    "[toggle event:click patient:.active destination:#button]",
    "[add patient:.highlight destination:#list]",
    "[remove patient:.item source:#list]",
    "[show target:#menu filter:!.hidden]",
    "[hide target:#menu filter:.open]",
    "[set patient::count value:5]",
    "[put value:\"hello\" destination:#out]",
    "[increment patient::count value:2]",
    "[decrement patient::count]",
    "[wait value:2s]",
    "[send patient:\"refresh\" destination:#form]",
    "[focus target:#input]",
    "[log event:load patient:\"ready\"]",
];

pub fn corpus() -> Vec<SemanticNode> {
    CORPUS
        .iter()
        .map(|text| Engine::global().from_explicit(text).unwrap())
        .collect()
}
