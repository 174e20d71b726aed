use blitzapp::autolink;
use blitzapp::codec;
use blitzapp::commands::move_notes;
use blitzapp::document::{Block, Document, Inline, TextStyle};
use blitzapp::model::{Note, NoteDefaults, Workspace};
use proptest::prelude::*;

fn style() -> impl Strategy<Value = TextStyle> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(bold, italic, underline)| {
        TextStyle {
            bold,
            italic,
            underline,
        }
    })
}

fn inline() -> impl Strategy<Value = Inline> {
    prop_oneof![
        ("[a-zA-Z0-9 .,!?]{0,24}", any::<bool>(), style()).prop_map(
            |(content, visited, style)| Inline::Text {
                content,
                visited,
                style
            }
        ),
        "(https://|www\\.)[a-z]{1,8}\\.com".prop_map(Inline::link),
    ]
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        prop::collection::vec(inline(), 0..4).prop_map(Block::paragraph),
        "[a-zA-Z0-9/\\\\ ._:-]{1,24}".prop_map(Block::link),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Block::image),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(block(), 0..6).prop_map(Document::from_blocks)
}

const WORDS: &[&str] = &[
    "hello",
    "see",
    "www.example.com",
    "https://docs.rs/regex/latest",
    "(http://foo.com/bar)",
    "example.org/path.",
    "mailto:me@example.com",
    "plain.",
    "\"quoted\"",
    "a.b",
];

fn prose() -> impl Strategy<Value = Document> {
    let line = prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "));
    prop::collection::vec((line, any::<bool>()), 1..4).prop_map(|lines| {
        Document::from_blocks(
            lines
                .into_iter()
                .map(|(text, visited)| {
                    let run = if visited {
                        Inline::visited_text(text)
                    } else {
                        Inline::text(text)
                    };
                    Block::paragraph(vec![run])
                })
                .collect(),
        )
    })
}

fn workspace_of(count: usize) -> Workspace {
    let mut ws = Workspace::fresh(&NoteDefaults::default());
    ws.notes = (0..count)
        .map(|i| Note::new(format!("n{}", i), "icon"))
        .collect();
    ws
}

/// The drag-and-drop edit, performed literally.
fn reference_move(mut names: Vec<String>, source: usize, target: usize) -> Vec<String> {
    if source < target {
        let moved = names[source].clone();
        names.insert(target + 1, moved);
        names.remove(source);
    } else if source > target {
        let moved = names[source].clone();
        names.insert(target, moved);
        names.remove(source + 1);
    }
    names
}

fn move_case() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..10usize).prop_flat_map(|count| (Just(count), 0..count, 0..count))
}

proptest! {
    #[test]
    fn prop_encode_is_stable_after_one_round_trip(doc in document()) {
        let persisted = codec::encode(&doc);
        prop_assert_eq!(codec::encode(&codec::decode(&persisted)), persisted);
    }

    #[test]
    fn prop_decode_restores_the_document(doc in document()) {
        prop_assert_eq!(codec::decode(&codec::encode(&doc)), doc);
    }

    #[test]
    fn prop_decode_never_fails(text in "\\PC{0,64}") {
        let _ = codec::decode(&text);
    }

    #[test]
    fn prop_autolink_is_idempotent(doc in prose()) {
        let mut doc = doc;
        autolink::apply(&mut doc);
        let once = doc.clone();
        prop_assert!(!autolink::apply(&mut doc));
        prop_assert_eq!(doc, once);
    }

    #[test]
    fn prop_autolink_preserves_text(doc in prose()) {
        let before = doc.plain_text();
        let mut doc = doc;
        autolink::apply(&mut doc);
        prop_assert_eq!(doc.plain_text(), before);
    }

    #[test]
    fn prop_move_matches_reference((count, source, target) in move_case()) {
        let mut ws = workspace_of(count);
        let names: Vec<String> = ws.notes.iter().map(|n| n.name.clone()).collect();

        move_notes::run(&mut ws, source, target);

        let moved: Vec<String> = ws.notes.iter().map(|n| n.name.clone()).collect();
        prop_assert_eq!(moved, reference_move(names.clone(), source, target));
        if source != target {
            prop_assert_eq!(ws.selected_index, target);
            prop_assert_eq!(&ws.notes[target].name, &names[source]);
        }
    }
}
