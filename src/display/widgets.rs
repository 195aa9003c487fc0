//! Widgety pre confusion matrix a ROC krivku.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, LegendPosition, Paragraph, Row, Table},
};

use crate::evaluation::{ConfusionMatrix, RocCurve, TestFigures};

/// Sekvenčná modrá škála (matplotlib "Blues"), od svetlej po tmavomodrú
const BLUES: [(u8, u8, u8); 9] = [
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

/// Farba pre intenzitu v [0, 1]
pub fn blues(intensity: f64) -> Color {
    let t = if intensity.is_finite() { intensity.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (BLUES.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(BLUES.len() - 1);
    let frac = scaled - lower as f64;

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = BLUES[lower];
    let (r1, g1, b1) = BLUES[upper];
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Confusion matrix ako tabuľka, bunky podfarbené podľa počtu
pub fn confusion_matrix_table(matrix: &ConfusionMatrix) -> Table<'static> {
    let max = matrix.max_count().max(1) as f64;
    let grid = matrix.as_grid();

    let count_cell = |count: usize| {
        let intensity = count as f64 / max;
        // Tmavé pozadie potrebuje biely text
        let fg = if intensity > 0.5 { Color::White } else { Color::Black };
        Cell::from(Line::from(count.to_string()).alignment(Alignment::Center))
            .style(Style::default().bg(blues(intensity)).fg(fg))
    };

    let rows = grid.iter().enumerate().map(|(label, counts)| {
        Row::new(vec![
            Cell::from(format!("True {}", label)),
            count_cell(counts[0]),
            count_cell(counts[1]),
        ])
        .height(3)
    });

    let header = Row::new(vec!["", "Pred 0", "Pred 1"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    Table::new(
        rows.collect::<Vec<_>>(),
        [Constraint::Length(8), Constraint::Length(10), Constraint::Length(10)],
    )
    .header(header)
    .column_spacing(0)
    .block(Block::default().borders(Borders::ALL).title(" Confusion Matrix (test) "))
}

/// ROC krivka s diagonálou náhodného klasifikátora
pub fn roc_chart<'a>(
    curve: &'a [(f64, f64)],
    chance: &'a [(f64, f64)],
    auc: f64,
    model_name: &str,
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name(format!("{} (AUC = {:.2})", model_name, auc))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(curve),
        Dataset::default()
            .name("Chance")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(chance),
    ];

    let unit_labels = || vec![Span::raw("0.0"), Span::raw("0.5"), Span::raw("1.0")];

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" ROC Curve (test) "))
        .legend_position(Some(LegendPosition::BottomRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .title("False Positive Rate")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.0])
                .labels(unit_labels()),
        )
        .y_axis(
            Axis::default()
                .title("True Positive Rate")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.0])
                .labels(unit_labels()),
        )
}

/// Nakreslí obe figúry vedľa seba a riadok s nápovedou
pub fn draw_figures(frame: &mut Frame, model_name: &str, figures: &TestFigures) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    frame.render_widget(confusion_matrix_table(&figures.confusion_matrix), panes[0]);

    match &figures.roc_curve {
        Some(roc) => draw_roc(frame, panes[1], model_name, roc),
        None => {
            let note = Paragraph::new("ROC-AUC skipped, no score to plot")
                .block(Block::default().borders(Borders::ALL).title(" ROC Curve (test) "));
            frame.render_widget(note, panes[1]);
        }
    }

    let footer = Paragraph::new(format!(" {} | q / Esc / Enter to close", model_name))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}

fn draw_roc(frame: &mut Frame, area: Rect, model_name: &str, roc: &RocCurve) {
    let curve = roc.xy();
    let chance = [(0.0, 0.0), (1.0, 1.0)];
    frame.render_widget(roc_chart(&curve, &chance, roc.auc, model_name), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn blues_endpoints() {
        assert_eq!(blues(0.0), Color::Rgb(247, 251, 255));
        assert_eq!(blues(1.0), Color::Rgb(8, 48, 107));
        assert_eq!(blues(2.0), Color::Rgb(8, 48, 107));
        assert_eq!(blues(f64::NAN), Color::Rgb(247, 251, 255));
    }

    #[test]
    fn draws_matrix_and_curve() {
        let figures = TestFigures {
            confusion_matrix: ConfusionMatrix {
                tn: 5,
                fp: 1,
                fn_: 2,
                tp: 7,
            },
            roc_curve: Some(RocCurve::compute(&[0.0, 1.0, 0.0, 1.0], &[0.1, 0.9, 0.3, 0.7]).unwrap()),
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw_figures(frame, "stub", &figures))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Confusion Matrix"));
        assert!(text.contains("ROC Curve"));
        assert!(text.contains("Pred 1"));
    }

    #[test]
    fn draws_placeholder_without_curve() {
        let figures = TestFigures {
            confusion_matrix: ConfusionMatrix::default(),
            roc_curve: None,
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw_figures(frame, "stub", &figures))
            .unwrap();

        assert!(screen_text(&terminal).contains("ROC-AUC skipped"));
    }
}
