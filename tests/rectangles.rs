use aarect::{decompose, rectangles, try_rectangles, FigureError};
use pretty_assertions::assert_eq;

fn sorted(figure: &str) -> Vec<String> {
    let mut found: Vec<String> = rectangles(figure).collect();
    found.sort();
    found
}

#[test]
fn single_rectangle_is_returned_as_is() {
    let figure = "+---+\n|   |\n+---+\n";
    assert_eq!(sorted(figure), vec![figure.to_string()]);
}

#[test]
fn shared_divider_yields_two_cells() {
    let figure = "+---+---+\n|   |   |\n+---+---+\n";
    let cell = "+---+\n|   |\n+---+\n".to_string();
    assert_eq!(sorted(figure), vec![cell.clone(), cell]);
    assert_eq!(decompose(figure).sizes(), vec![(5, 3), (5, 3)]);
}

#[test]
fn unmatched_corner_contributes_nothing() {
    let figure = "+---+ +\n|   |\n+---+\n";
    assert_eq!(sorted(figure), vec!["+---+\n|   |\n+---+\n".to_string()]);

    assert_eq!(rectangles("+\n").count(), 0);
    assert_eq!(rectangles("  +  \n     \n  +  ").count(), 0);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(rectangles("").count(), 0);
    assert!(decompose("").is_empty());
}

#[test]
fn degenerate_flat_rectangle() {
    assert_eq!(sorted("+-+\n+-+"), vec!["+-+\n+-+\n".to_string()]);
}

#[test]
fn rendering_decomposes_to_itself() {
    let figure = concat!(
        "+------------+\n",
        "|            |\n",
        "|            |\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "|      |     |\n",
        "+------+-----+\n",
    );
    for rendering in rectangles(figure) {
        assert_eq!(sorted(&rendering), vec![rendering.clone()]);
    }
}

#[test]
fn composite_figure() {
    let figure = concat!(
        "+------------+\n",
        "|            |\n",
        "|            |\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "|      |     |\n",
        "+------+-----+\n",
    );
    let expected = vec![
        "+-----+\n|     |\n|     |\n+-----+\n".to_string(),
        "+------+\n|      |\n|      |\n+------+\n".to_string(),
        "+------------+\n|            |\n|            |\n|            |\n+------------+\n"
            .to_string(),
    ];
    assert_eq!(sorted(figure), expected);
}

#[test]
fn nested_rectangle_rejects_outer() {
    let figure = concat!(
        "+-----+\n",
        "|     |\n",
        "| +-+ |\n",
        "| | | |\n",
        "| +-+ |\n",
        "|     |\n",
        "+-----+\n",
    );
    assert_eq!(sorted(figure), vec!["+-+\n| |\n+-+\n".to_string()]);
}

#[test]
fn grid_of_four_cells() {
    let figure = concat!(
        "+--+---+\n",
        "|  |   |\n",
        "+--+---+\n",
        "|  |   |\n",
        "|  |   |\n",
        "+--+---+\n",
    );
    assert_eq!(
        decompose(figure).sizes(),
        vec![(4, 3), (4, 4), (5, 3), (5, 4)]
    );
}

#[test]
fn ragged_rows_do_not_panic() {
    let figure = "+---+\n|   |\n+---+\n|\n+---+";
    assert_eq!(sorted(figure), vec!["+---+\n|   |\n+---+\n".to_string()]);
}

#[test]
fn strict_entry_point() {
    let figure = "+---+\n|   |\n+---+\n";
    assert_eq!(try_rectangles(figure).unwrap().count(), 1);

    let err = try_rectangles("+---+\n| a |\n+---+\n").unwrap_err();
    assert_eq!(
        err,
        FigureError::UnexpectedChar {
            ch: 'a',
            row: 1,
            column: 2,
        }
    );
}

#[test]
fn iterator_reports_exact_length() {
    let figure = "+---+---+\n|   |   |\n+---+---+\n";
    let mut found = rectangles(figure);
    assert_eq!(found.len(), 2);
    found.next();
    assert_eq!(found.len(), 1);
    found.next();
    assert_eq!(found.next(), None);
}
