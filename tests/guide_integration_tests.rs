//! Guide Integration Tests
//!
//! Walks the bundled guide end to end: store lookups, rendering and
//! pagination for every section.

use approx::assert_relative_eq;
use reading_guide::guide::ContentBlock;
use reading_guide::render::HeadingLevel;
use reading_guide::{
    parse_section_id, render_blocks, DocumentStore, ForwardTarget, Navigation, Position,
    RenderedBlock, DEFAULT_SECTION_ID,
};

const SECTION_COUNT: u32 = 16;

fn store() -> DocumentStore {
    DocumentStore::bundled().expect("bundled guide should load")
}

#[test]
fn test_every_section_matches_contents_entry() {
    let store = store();
    let contents = store.list_sections();

    assert_eq!(store.section_count(), SECTION_COUNT);
    assert_eq!(contents.len(), SECTION_COUNT as usize);

    for entry in &contents {
        let section = store.get_section(entry.id);
        assert_eq!(section.id, entry.id);
        assert_eq!(section.title, entry.title);
        assert!(!section.blocks.is_empty(), "section {} has no blocks", entry.id);
        assert!(!entry.description.is_empty());
    }
}

#[test]
fn test_out_of_range_ids_resolve_to_first_section() {
    let store = store();
    let first = store.get_section(DEFAULT_SECTION_ID).clone();

    for raw in ["0", "17", "abc", "-1", ""] {
        let id = parse_section_id(raw, store.section_count());
        assert_eq!(store.get_section(id), &first, "input {:?}", raw);
    }
    assert_eq!(store.get_section(17), &first);
}

#[test]
fn test_rendering_preserves_block_order() {
    let store = store();

    for summary in store.list_sections() {
        let section = store.get_section(summary.id);
        let rendered = render_blocks(&section.blocks);

        let expected: Vec<&str> = section
            .blocks
            .iter()
            .filter(|b| !matches!(b, ContentBlock::Unknown))
            .map(ContentBlock::kind)
            .collect();
        let actual: Vec<&str> = rendered.iter().map(RenderedBlock::kind).collect();
        assert_eq!(actual, expected, "section {}", section.id);
    }
}

#[test]
fn test_first_section_opens_with_top_level_heading() {
    let store = store();
    let rendered = render_blocks(&store.get_section(1).blocks);

    match &rendered[0] {
        RenderedBlock::Heading(heading) => {
            assert_eq!(heading.level, HeadingLevel::Top);
            assert_eq!(heading.text, "What is Generative AI?");
        }
        other => panic!("expected heading, got {:?}", other),
    }
}

#[test]
fn test_bundled_tables_render_every_row() {
    let store = store();
    let section = store.get_section(3);

    let tables: Vec<_> = render_blocks(&section.blocks)
        .into_iter()
        .filter_map(|b| match b {
            RenderedBlock::Table(table) => Some(table),
            _ => None,
        })
        .collect();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].headers[0], "Tool");
    assert_eq!(tables[0].rows.len(), 4);
    for table in &tables {
        for row in &table.rows {
            assert_eq!(row.cells.len(), table.headers.len());
        }
    }
}

#[test]
fn test_render_twice_is_identical() {
    let store = store();
    for id in 1..=SECTION_COUNT {
        let section = store.get_section(id);
        assert_eq!(render_blocks(&section.blocks), render_blocks(&section.blocks));
    }
}

#[test]
fn test_navigation_walk_reaches_contents() {
    let store = store();
    let total = store.section_count();

    let mut current = 1;
    let mut visited = vec![];
    loop {
        let nav = Navigation::new(current, total);
        visited.push(nav.position());
        match nav.next {
            ForwardTarget::Section(next) => {
                assert_eq!(next, current + 1);
                current = next;
            }
            ForwardTarget::Contents => break,
        }
    }

    assert_eq!(current, total);
    assert_eq!(visited.first(), Some(&Position::Start));
    assert_eq!(visited.last(), Some(&Position::End));
    assert_eq!(visited.len(), total as usize);
}

#[test]
fn test_progress_for_bundled_guide() {
    let total = store().section_count();
    assert_relative_eq!(Navigation::new(8, total).progress_fraction(), 0.5);
    assert_relative_eq!(Navigation::new(16, total).progress_fraction(), 1.0);
    assert_relative_eq!(Navigation::new(1, total).progress_fraction(), 0.0625);
}
