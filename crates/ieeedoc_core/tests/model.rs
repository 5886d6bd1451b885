/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use ieeedoc_core::{
    embedded, Author, Command, Figure, FigureSize, PaperData, Reference, ReferencePatch, Section,
    SectionPatch, Table, TokenKind,
};

fn section_ids(paper: &PaperData) -> Vec<&str> {
    paper.sections.iter().map(|s| s.id.as_str()).collect()
}

fn edited_paper() -> PaperData {
    embedded::template().apply_all(vec![
        Command::SetTitle {
            title: "Learning to Grasp".into(),
        },
        Command::AddAuthor {
            author: Author {
                name: "Ada Lovelace".into(),
                affiliation: "Analytical Engines Ltd.".into(),
                email: "ada@example.org".into(),
            },
        },
        Command::RemoveKeyword { index: 1 },
        Command::AddSection {
            section: Section::placeholder("6"),
        },
        Command::UpdateSection {
            id: "6".into(),
            patch: SectionPatch {
                title: Some("Appendix".into()),
                ..Default::default()
            },
        },
        Command::AddFigure {
            figure: Figure::new("f1", "data:image/png;base64,AAAA", "Gripper")
                .resize_to(FigureSize::Medium),
        },
        Command::AddTable {
            table: Table::with_shape("t1", 2, 3),
        },
        Command::SetTableCell {
            id: "t1".into(),
            row: 1,
            column: 2,
            text: "0.93".into(),
        },
        Command::InsertToken {
            section: "2".into(),
            caret: 3,
            kind: TokenKind::Table,
            target: "t1".into(),
        },
        Command::AddReference {
            reference: Reference::blank("r2", "2026"),
        },
        Command::UpdateReference {
            id: "r2".into(),
            patch: ReferencePatch {
                conference: Some("Proc. ICRA".into()),
                ..Default::default()
            },
        },
        Command::MoveSection { from: 5, to: 0 },
    ])
}

#[test]
fn test_json_round_trip_after_edits() {
    let paper = edited_paper();
    let json = serde_json::to_string(&paper).unwrap();
    let back: PaperData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, paper);
    assert_eq!(back.sections[0].title, "Appendix");
}

#[test]
fn test_json_round_trip_keeps_empty_collections() {
    let paper = PaperData::default();
    let json = serde_json::to_value(&paper).unwrap();
    assert_eq!(json["sections"], serde_json::json!([]));
    assert_eq!(json["figures"], serde_json::json!([]));
    let back: PaperData = serde_json::from_value(json).unwrap();
    assert_eq!(back, paper);
}

#[test]
fn test_yaml_round_trip_after_edits() {
    let paper = edited_paper();
    let yaml = serde_yaml::to_string(&paper).unwrap();
    let back: PaperData = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, paper);
}

#[test]
fn test_reads_persisted_document_shape() {
    let json = r#"{
        "title": "T",
        "authors": [],
        "abstract": "A",
        "keywords": ["k"],
        "sections": [
            {"id": "1", "title": "Intro", "content": "<p>x</p>", "type": "text"},
            {"id": "2", "title": "Fig", "content": "", "type": "figure", "figureId": "f1"}
        ],
        "references": [
            {"id": "r", "authors": "A", "title": "B", "conference": "C", "year": "2020"}
        ],
        "figures": [],
        "tables": []
    }"#;
    let paper: PaperData = serde_json::from_str(json).unwrap();
    assert_eq!(paper.sections[1].figure_id.as_deref(), Some("f1"));
    assert_eq!(paper.references[0].journal, None);
    assert_eq!(paper.references[0].venue(), Some("C"));

    let out = serde_json::to_value(&paper).unwrap();
    assert_eq!(out["sections"][1]["figureId"], "f1");
    assert!(out["references"][0].get("journal").is_none());
}

#[test]
fn test_reorder_to_same_index_is_identity() {
    let paper = embedded::template();
    for i in 0..paper.sections.len() {
        let moved = paper.clone().apply(Command::MoveSection { from: i, to: i });
        assert_eq!(section_ids(&moved), section_ids(&paper));
    }
}

#[test]
fn test_reorder_moves_one_section() {
    let paper = embedded::template().apply(Command::MoveSection { from: 0, to: 3 });
    assert_eq!(section_ids(&paper), vec!["2", "3", "4", "1", "5"]);
}

#[test]
fn test_table_stays_rectangular_through_edits() {
    let commands = vec![
        Command::AddTableColumn { id: "t".into() },
        Command::AddTableRow { id: "t".into() },
        Command::RemoveTableColumn {
            id: "t".into(),
            column: 0,
        },
        Command::AddTableColumn { id: "t".into() },
        Command::RemoveTableRow { id: "t".into(), row: 1 },
        Command::RemoveTableRow { id: "t".into(), row: 9 },
        Command::RemoveTableColumn {
            id: "t".into(),
            column: 7,
        },
        Command::AddTableRow { id: "t".into() },
        Command::RemoveTableColumn {
            id: "t".into(),
            column: 1,
        },
    ];

    let mut paper = PaperData::default().apply(Command::AddTable {
        table: Table::with_shape("t", 2, 2),
    });
    for command in commands {
        paper = paper.apply(command);
        let table = &paper.tables[0];
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }
    assert_eq!(paper.tables[0].headers.len(), 2);
    assert_eq!(paper.tables[0].rows.len(), 3);
}

#[test]
fn test_patch_cannot_change_section_id() {
    let paper = embedded::template().apply(Command::UpdateSection {
        id: "1".into(),
        patch: SectionPatch {
            content: Some("<p>new</p>".into()),
            ..Default::default()
        },
    });
    let section = paper.section("1").unwrap();
    assert_eq!(section.content, "<p>new</p>");
    assert_eq!(section.title, "Introduction");
}
