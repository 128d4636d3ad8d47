use proptest::prelude::*;
use tiny_wrap::wrap::{layout_horizontal, layout_vertical, DEFAULT_EMPTY_LINE_HEIGHT};
use tiny_wrap::*;

fn cells(advance: f32) -> MonospaceMetrics {
    MonospaceMetrics::new(advance, 8.0, -2.0)
}

fn starts(line: &WrapLine) -> Vec<usize> {
    line.sublines.iter().map(|s| s.start).collect()
}

fn single_line(text: &str, metrics: &mut MonospaceMetrics, width: f32) -> WrapLine {
    let mut line = WrapLine::new(build_string(text, metrics));
    let mut wrap = WrapAlgorithm::new(width).with_line_space(1.0);
    wrap.recalculate_line(&mut line, &*metrics, 0.0);
    line
}

#[test]
fn test_short_text_is_one_row() {
    let mut metrics = cells(10.0);
    let line = single_line("abc", &mut metrics, 100.0);

    assert_eq!(starts(&line), vec![0]);
    assert_eq!(line.sublines[0].width, 30.0);
}

#[test]
fn test_word_moves_after_space() {
    let mut metrics = cells(8.0);
    let line = single_line("hello world", &mut metrics, 50.0);

    // "hello " is 48 wide, 'w' would end at 56
    assert_eq!(starts(&line), vec![0, 6]);
    assert_eq!(line.chars[6].position.x.0, 0.0);
    assert_eq!(line.chars[10].position.x.0, 32.0);
}

#[test]
fn test_oversized_glyph_overflows_alone() {
    let mut metrics = cells(10.0);
    let wide = GlyphMetrics {
        advance: 20.0,
        width: 20.0,
        ..metrics.cell_metrics('W')
    };
    metrics.set_glyph('W', wide);

    let line = single_line("W", &mut metrics, 10.0);
    assert_eq!(starts(&line), vec![0]);
    assert_eq!(line.sublines[0].width, 20.0);
}

#[test]
fn test_hard_break_starts_next_row() {
    let mut metrics = cells(10.0);
    let line = single_line("abc\ndef", &mut metrics, 1000.0);
    assert_eq!(starts(&line), vec![0, 4]);
}

#[test]
fn test_empty_line_adds_default_height() {
    let mut metrics = cells(10.0);

    let mut without = WrapAlgorithm::new(100.0);
    without.set_text_column(build_column("ab", &mut metrics), Some(&metrics));

    let mut with = WrapAlgorithm::new(100.0);
    with.set_text_column(build_column("ab\n", &mut metrics), Some(&metrics));

    assert!((with.height() - without.height() - DEFAULT_EMPTY_LINE_HEIGHT).abs() < 1e-4);
    assert_eq!(with.column().unwrap().get(1).unwrap().height, 15.0);
}

#[test]
fn test_consecutive_trailing_spaces() {
    let mut metrics = cells(10.0);
    let line = single_line("abc  de", &mut metrics, 30.0);

    // The first space opens the next row with no width, the second is placed normally
    assert_eq!(starts(&line), vec![0, 3]);
    let xs: Vec<f32> = line.chars.iter().map(|c| c.position.x.0).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 0.0, 0.0, 10.0, 20.0]);
    assert_eq!(line.sublines[0].width, 30.0);
    assert_eq!(line.sublines[1].width, 30.0);
}

#[test]
fn test_passes_run_separately() {
    let mut metrics = cells(10.0);
    let mut chars = build_string("ab cd ef", &mut metrics);

    let mut rows = layout_horizontal(&mut chars, &metrics, 50.0, 0.0).sublines;
    let before: Vec<(usize, f32)> = rows.iter().map(|r| (r.start, r.width)).collect();
    let xs: Vec<f32> = chars.iter().map(|c| c.position.x.0).collect();

    let vertical = layout_vertical(&mut rows, &mut chars, &metrics, 0.0, 1.3);

    // Vertical pass leaves every horizontal decision alone
    let after: Vec<(usize, f32)> = rows.iter().map(|r| (r.start, r.width)).collect();
    assert_eq!(before, after);
    assert_eq!(xs, chars.iter().map(|c| c.position.x.0).collect::<Vec<_>>());
    assert!((vertical.height - 2.0 * 13.0).abs() < 1e-4);
}

#[test]
fn test_two_widths_then_last_repeats() {
    let mut metrics = cells(10.0);
    let column = build_column("aaaaaa\naaaaaa\naaaaaa", &mut metrics);

    let mut wrap = WrapAlgorithm::default();
    wrap.set_widths(&[60.0, 30.0], None);
    wrap.set_text_column(column, Some(&metrics));

    let rows: Vec<usize> = wrap
        .column()
        .unwrap()
        .lines()
        .map(|l| l.sublines.len())
        .collect();
    assert_eq!(rows, vec![1, 2, 2]);
    assert_eq!(wrap.total_width(), 60.0);
}

#[test]
fn test_hit_test_round_trips_caret() {
    let mut metrics = cells(10.0);
    let text = "one two three\n\nfour";
    let mut wrap = WrapAlgorithm::new(45.0).with_line_space(1.0);
    wrap.set_text_column(build_column(text, &mut metrics), Some(&metrics));
    let column = wrap.column().unwrap();

    for caret in [0, 2, 4, 9, 14, 15, 17] {
        let line = coordinates::line_of_text_index(text, caret);
        let pos = coordinates::locate_caret(column, &metrics, line, caret);
        // Nudge inside the row so the lookup lands on the same character
        let probe = LayoutPos::new(pos.x.0 + 1.0, pos.y.0 + 1.0);
        assert_eq!(
            coordinates::hit_test(column, &metrics, probe),
            Some(caret),
            "caret {caret} at {pos}"
        );
    }
}

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            6 => proptest::char::range('a', 'e'),
            2 => Just(' '),
            1 => Just('-'),
            1 => Just('\n'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Monospace cells with a few wider and narrower letters, and a space with a
/// left bearing
fn varied_metrics() -> MonospaceMetrics {
    let mut metrics = cells(10.0);
    for (ch, width) in [('a', 4.0), ('b', 13.0), ('c', 27.0)] {
        let glyph = GlyphMetrics {
            advance: width,
            width,
            ..metrics.cell_metrics(ch)
        };
        metrics.set_glyph(ch, glyph);
    }
    let space = GlyphMetrics {
        offset_x: 2.0,
        ..metrics.cell_metrics(' ')
    };
    metrics.set_glyph(' ', space);
    metrics
}

proptest! {
    #[test]
    fn prop_rows_partition_the_line(text in arb_text(), width in 1.0f32..200.0) {
        let mut metrics = varied_metrics();
        let line = single_line(&text, &mut metrics, width);

        if text.is_empty() {
            prop_assert!(line.sublines.is_empty());
            return Ok(());
        }

        let starts = starts(&line);
        prop_assert_eq!(starts[0], 0);
        for pair in starts.windows(2) {
            prop_assert!(pair[0] < pair[1], "starts not increasing: {:?}", starts);
        }
        prop_assert!(*starts.last().unwrap() <= line.chars.len());

        // Every hard break is followed by a row boundary
        for (idx, ch) in text.chars().enumerate() {
            if ch == '\n' {
                prop_assert!(starts.contains(&(idx + 1)));
            }
        }
    }

    #[test]
    fn prop_rows_fit_the_width(text in arb_text(), width in 30.0f32..200.0) {
        let mut metrics = varied_metrics();
        let line = single_line(&text, &mut metrics, width);

        for row in 0..line.sublines.len() {
            let range = line.subline_range(row);
            let row_start = range.start;
            for idx in range {
                let ch = &line.chars[idx];
                let m = metrics.metrics(ch.glyph);
                if idx == row_start || m.is_whitespace {
                    continue;
                }
                prop_assert!(
                    ch.position.x.0 + m.extent() <= width + 1e-3,
                    "char {} at {} overflows {}", idx, ch.position.x.0, width
                );
            }
        }
    }

    #[test]
    fn prop_every_row_starts_at_offset(text in arb_text(), width in 1.0f32..200.0, offset in 0.0f32..20.0) {
        prop_assume!(!text.is_empty());
        let mut metrics = varied_metrics();
        let mut chars = build_string(&text, &mut metrics);
        let rows = layout_horizontal(&mut chars, &metrics, width, offset).sublines;

        for row in &rows {
            // A trailing hard break opens a row with no characters
            let Some(ch) = chars.get(row.start) else {
                continue;
            };
            let m = metrics.metrics(ch.glyph);
            prop_assert_eq!(
                ch.position.x.0,
                offset + m.offset_x,
                "row starting at {} of {:?}", row.start, text
            );
        }
    }

    #[test]
    fn prop_row_heights_sum_to_line_height(text in arb_text(), width in 1.0f32..200.0, line_space in 1.0f32..2.0) {
        let mut metrics = varied_metrics();
        let mut line = WrapLine::new(build_string(&text, &mut metrics));
        let mut wrap = WrapAlgorithm::new(width).with_line_space(line_space);
        wrap.recalculate_line(&mut line, &metrics, 0.0);

        let sum: f32 = line.sublines.iter().map(|s| s.height).sum();
        prop_assert!((sum - line.height).abs() < 1e-3);

        let mut y = 0.0f32;
        for row in &line.sublines {
            prop_assert!((row.rel_y_pos - y).abs() < 1e-3);
            y += row.height;
        }
    }

    #[test]
    fn prop_paragraph_layout_is_idempotent(text in arb_text(), width in 1.0f32..200.0) {
        let mut metrics = varied_metrics();
        let mut wrap = WrapAlgorithm::new(width);
        wrap.set_text_column(build_column(&text, &mut metrics), Some(&metrics));
        let first = wrap.column().cloned();
        let height = wrap.height();

        wrap.recalculate(&metrics);
        prop_assert_eq!(wrap.column().cloned(), first);
        prop_assert_eq!(wrap.height(), height);

        let sum: f32 = wrap.column().unwrap().total_height();
        prop_assert!((sum - wrap.height()).abs() < 1e-2);
    }
}
