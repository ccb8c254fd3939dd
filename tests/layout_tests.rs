//! End-to-end properties of the public layout API.

mod common;

use common::row_contents;
use trellis::{Command, LayoutConfig, LayoutEngine, Measurable, TextRun, layout};

/// A token stream shaped like a small program, mixing every command kind.
fn program() -> Command<TextRun> {
    let kw = |s: &str| Command::element(TextRun::monospace(s, 1.0).with_style("keyword"));
    let id = |s: &str| Command::element(TextRun::monospace(s, 1.0));

    let statement = |name: &str, value: &str| {
        Command::concat([
            kw("let"),
            Command::line(),
            id(name),
            Command::line(),
            id("="),
            Command::line(),
            id(value),
            id(";"),
        ])
    };

    Command::concat([
        kw("fn"),
        Command::line(),
        id("main()"),
        Command::line(),
        id("{"),
        Command::indent(Command::concat([
            Command::hard_line(),
            statement("width", "80"),
            Command::hard_line(),
            statement("items", "vec![1, 2, 3]"),
            Command::hard_line(),
            Command::hard_line(),
            Command::join(
                Command::concat([id(","), Command::line()]),
                ["first", "second", "third", "fourth"].map(id),
            ),
        ])),
        Command::hard_line(),
        id("}"),
    ])
}

fn leaves<'a>(command: &'a Command<TextRun>, out: &mut Vec<&'a str>) {
    match command {
        Command::Element(e) => out.push(e.as_str()),
        Command::Line | Command::HardLine => {}
        Command::Indent(child) => leaves(child, out),
        Command::Concat(children) => children.iter().for_each(|c| leaves(c, out)),
        Command::Join {
            separator,
            children,
        } => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    leaves(separator, out);
                }
                leaves(child, out);
            }
        }
    }
}

#[test]
fn test_every_leaf_placed_once_in_order_at_any_width() {
    let tree = program();
    let mut source = Vec::new();
    leaves(&tree, &mut source);

    for max_width in [1.0, 5.0, 12.0, 17.5, 30.0, 200.0] {
        let result = layout(&tree, &LayoutConfig::new(max_width, 1.0, 4.0).unwrap()).unwrap();
        let placed: Vec<&str> = result.elements().map(|p| p.element.as_str()).collect();
        assert_eq!(placed, source, "order broken at width {max_width}");

        for row in result.rows() {
            assert!(
                row.iter().map(|p| p.x).collect::<Vec<_>>().windows(2).all(|w| w[0] <= w[1]),
                "offsets decrease at width {max_width}"
            );
        }
    }
}

#[test]
fn test_rows_stay_within_width_unless_single_element() {
    let tree = program();
    let config = LayoutConfig::new(14.0, 1.0, 2.0).unwrap();
    let result = layout(&tree, &config).unwrap();

    for row in result.rows() {
        let first_start = row.elements().first().map_or(0.0, |p| p.x);
        let overflow = row.extent() >= config.max_width;
        // Only the first element of a row may reach the boundary, and only when it
        // is too wide on its own.
        if overflow {
            let last = &row.elements()[row.len() - 1];
            assert_eq!(last.x, first_start);
            assert!(first_start + last.element.width() >= config.max_width);
        }
    }
}

#[test]
fn test_wide_layout_matches_expected_program_shape() {
    let result = layout(&program(), &LayoutConfig::new(80.0, 1.0, 4.0).unwrap()).unwrap();
    let text = trellis::render_plain(&result, 1.0).unwrap();
    assert_eq!(
        text,
        concat!(
            "fn main() {\n",
            "    let width = 80;\n",
            "    let items = vec![1, 2, 3];\n",
            "\n",
            "    first, second, third, fourth\n",
            "}"
        )
    );
}

#[test]
fn test_engine_reuse_and_identical_output() {
    let engine = LayoutEngine::new(LayoutConfig::new(10.0, 1.0, 4.0).unwrap()).unwrap();
    let tree = program();
    let first = engine.layout(&tree).unwrap();
    for _ in 0..3 {
        assert_eq!(engine.layout(&tree).unwrap(), first);
    }
    assert_eq!(row_contents(&first), row_contents(&engine.layout(&tree).unwrap()));
}

#[test]
fn test_borrowed_elements_can_be_laid_out() {
    let tokens = vec![TextRun::monospace("alpha", 1.0), TextRun::monospace("beta", 1.0)];
    let tree = Command::join(Command::line(), tokens.iter().map(Command::element));
    let result = layout(&tree, &LayoutConfig::new(8.0, 1.0, 0.0).unwrap()).unwrap();

    assert_eq!(result.row_count(), 2);
    assert!(std::ptr::eq(result.rows()[1].elements()[0].element, &tokens[1]));
}
