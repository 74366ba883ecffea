//! Headless SVG export of motif layouts.

use motif_mark_protocol::{LayoutReport, SequenceReport};
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

const DEFAULT_MOTIF_COLOR: &str = "#444444";
const LABEL_HEIGHT: f32 = 18.0;
const EXON_HEIGHT: f32 = 16.0;
const LEGEND_ROW_HEIGHT: f32 = 18.0;
const LEGEND_SWATCH: f32 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: f32,
    pub margin: f32,
    pub lane_height: f32,
    pub motif_height: f32,
    pub panel_gap: f32,
    pub show_legend: bool,
    pub show_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            margin: 40.0,
            lane_height: 12.0,
            motif_height: 9.0,
            panel_gap: 30.0,
            show_legend: true,
            show_labels: true,
        }
    }
}

fn bp_to_x(bp: usize, len: usize, left: f32, right: f32) -> f32 {
    if len == 0 {
        return left;
    }
    let frac = bp as f32 / len as f32;
    left + (right - left) * frac
}

fn panel_height(sequence: &SequenceReport, settings: &RenderSettings) -> f32 {
    LABEL_HEIGHT + sequence.lane_count as f32 * settings.lane_height + EXON_HEIGHT
}

fn legend_height(report: &LayoutReport, settings: &RenderSettings) -> f32 {
    if !settings.show_legend || report.motifs.is_empty() {
        return 0.0;
    }
    LEGEND_ROW_HEIGHT * (report.motifs.len() as f32 + 1.0)
}

/// Total canvas height: one panel per sequence, tall enough for its lanes,
/// plus the legend.
pub fn canvas_height(report: &LayoutReport, settings: &RenderSettings) -> f32 {
    let panels: f32 = report
        .sequences
        .iter()
        .map(|s| panel_height(s, settings) + settings.panel_gap)
        .sum();
    2.0 * settings.margin + panels + legend_height(report, settings)
}

fn render_panel(
    mut doc: Document,
    report: &LayoutReport,
    sequence: &SequenceReport,
    top: f32,
    left: f32,
    right: f32,
    settings: &RenderSettings,
) -> Document {
    if settings.show_labels {
        doc = doc.add(
            Text::new(sequence.label.as_str())
                .set("x", left)
                .set("y", top + LABEL_HEIGHT - 6.0)
                .set("font-family", "sans-serif")
                .set("font-size", 12)
                .set("fill", "#111111"),
        );
    }
    let lanes_top = top + LABEL_HEIGHT;
    let baseline = lanes_top + sequence.lane_count as f32 * settings.lane_height + EXON_HEIGHT / 2.0;
    let len = sequence.length;

    doc = doc.add(
        Line::new()
            .set("x1", left)
            .set("y1", baseline)
            .set("x2", right)
            .set("y2", baseline)
            .set("stroke", "#000000")
            .set("stroke-width", 2),
    );

    for exon in &sequence.exons {
        let x1 = bp_to_x(exon.start, len, left, right);
        let x2 = bp_to_x(exon.end, len, left, right).max(x1 + 1.0);
        doc = doc.add(
            Rectangle::new()
                .set("x", x1)
                .set("y", baseline - EXON_HEIGHT / 2.0)
                .set("width", x2 - x1)
                .set("height", EXON_HEIGHT)
                .set("fill", "#000000"),
        );
    }

    // lane 0 sits just above the exon boxes, higher lanes stack upwards
    for placed in &sequence.occurrences {
        let x1 = bp_to_x(placed.start, len, left, right);
        let x2 = bp_to_x(placed.end, len, left, right).max(x1 + 1.0);
        let lane_bottom = baseline - EXON_HEIGHT / 2.0 - placed.lane as f32 * settings.lane_height;
        let color = report
            .color_of(&placed.motif)
            .unwrap_or(DEFAULT_MOTIF_COLOR);
        doc = doc.add(
            Rectangle::new()
                .set("x", x1)
                .set("y", lane_bottom - settings.motif_height)
                .set("width", x2 - x1)
                .set("height", settings.motif_height)
                .set("fill", color)
                .set("fill-opacity", 0.85)
                .set("data-motif", placed.motif.as_str())
                .set("data-lane", placed.lane.to_string()),
        );
    }
    doc
}

fn render_legend(mut doc: Document, report: &LayoutReport, top: f32, left: f32) -> Document {
    doc = doc.add(
        Text::new("Motifs")
            .set("x", left)
            .set("y", top + LEGEND_ROW_HEIGHT - 4.0)
            .set("font-family", "sans-serif")
            .set("font-size", 13)
            .set("font-weight", "bold")
            .set("fill", "#111111"),
    );
    for (idx, entry) in report.motifs.iter().enumerate() {
        let y = top + LEGEND_ROW_HEIGHT * (idx as f32 + 1.0);
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", left)
                    .set("y", y + 3.0)
                    .set("width", LEGEND_SWATCH)
                    .set("height", LEGEND_SWATCH)
                    .set("fill", entry.color.as_str()),
            )
            .add(
                Text::new(entry.motif.as_str())
                    .set("x", left + LEGEND_SWATCH + 6.0)
                    .set("y", y + LEGEND_SWATCH + 1.0)
                    .set("font-family", "monospace")
                    .set("font-size", 12)
                    .set("fill", "#111111"),
            );
    }
    doc
}

/// Draws every sequence of the report as a stacked panel. Panels share one
/// bp scale, so the longest sequence spans the full drawable width.
pub fn export_layout_svg(report: &LayoutReport, settings: &RenderSettings) -> String {
    let width = settings.width;
    let height = canvas_height(report, settings);
    let left = settings.margin;
    let drawable = (width - 2.0 * settings.margin).max(1.0);
    let longest = report
        .sequences
        .iter()
        .map(|s| s.length)
        .max()
        .unwrap_or(0);

    let mut doc = Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "#ffffff"),
        );

    let mut top = settings.margin;
    for sequence in &report.sequences {
        // scale every panel against the longest sequence
        let right = if longest == 0 {
            left
        } else {
            left + drawable * sequence.length as f32 / longest as f32
        };
        doc = render_panel(doc, report, sequence, top, left, right, settings);
        top += panel_height(sequence, settings) + settings.panel_gap;
    }

    if settings.show_legend && !report.motifs.is_empty() {
        doc = render_legend(doc, report, top, left);
    }

    doc.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_mark_protocol::{ExonSpan, MotifColor, PlacedMotif};

    fn report() -> LayoutReport {
        LayoutReport::new(
            vec![
                MotifColor {
                    motif: "ygcy".to_string(),
                    color: "#0072b2".to_string(),
                },
                MotifColor {
                    motif: "catag".to_string(),
                    color: "#e69f00".to_string(),
                },
            ],
            vec![SequenceReport {
                label: "INSR chr19".to_string(),
                length: 100,
                exons: vec![ExonSpan { start: 40, end: 60 }],
                occurrences: vec![
                    PlacedMotif {
                        motif: "ygcy".to_string(),
                        start: 10,
                        end: 14,
                        lane: 0,
                    },
                    PlacedMotif {
                        motif: "catag".to_string(),
                        start: 12,
                        end: 17,
                        lane: 1,
                    },
                ],
                lane_count: 2,
            }],
        )
    }

    fn text_nodes(svg: &str) -> usize {
        svg.matches("<text").count()
    }

    #[test]
    fn svg_contains_label_motifs_and_legend() {
        let svg = export_layout_svg(&report(), &RenderSettings::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("INSR chr19"));
        assert!(svg.contains("#0072b2"));
        assert!(svg.contains("#e69f00"));
        assert!(svg.contains("data-lane=\"1\""));
        // sequence label, legend heading, one entry per motif
        assert_eq!(text_nodes(&svg), 4);
        assert!(svg.contains("\nMotifs\n"));
        assert!(svg.contains("font-weight=\"bold\""));
    }

    #[test]
    fn legend_can_be_disabled() {
        let settings = RenderSettings {
            show_legend: false,
            ..RenderSettings::default()
        };
        let svg = export_layout_svg(&report(), &settings);
        assert_eq!(text_nodes(&svg), 1);
        assert!(!svg.contains("\nMotifs\n"));
        assert!(!svg.contains("font-weight=\"bold\""));
        assert!(canvas_height(&report(), &settings) < canvas_height(&report(), &RenderSettings::default()));
    }

    #[test]
    fn canvas_grows_with_lane_count() {
        let settings = RenderSettings::default();
        let base = report();
        let mut taller = base.clone();
        taller.sequences[0].lane_count = 5;
        let diff = canvas_height(&taller, &settings) - canvas_height(&base, &settings);
        assert!((diff - 3.0 * settings.lane_height).abs() < 1e-3);
    }

    #[test]
    fn settings_fill_missing_fields_from_default() {
        let settings: RenderSettings = serde_json::from_str(r#"{"width": 800.0}"#).unwrap();
        assert_eq!(settings.width, 800.0);
        assert_eq!(settings.margin, RenderSettings::default().margin);
        assert!(settings.show_legend);
    }

    #[test]
    fn empty_report_renders_blank_canvas() {
        let svg = export_layout_svg(&LayoutReport::new(vec![], vec![]), &RenderSettings::default());
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<text"));
    }
}
