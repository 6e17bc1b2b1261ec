use asset_length::AssetLengthCalculator;
use asset_length::length::{decomposer, dispatcher};
use itertools::{Itertools, izip};
use log::warn;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg_util::{self, Frame, SvgDrawOptions};
use crate::job::MeasuredJob;

/// Draws the parts of the work area, the lines measured for every asset
/// and the portions of them lying inside the work area.
pub fn lengths_to_svg(
    job: &MeasuredJob,
    calculator: &AssetLengthCalculator,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let parts = decomposer::parts(&job.work_area);
    let measured_lines = job
        .assets
        .iter()
        .map(dispatcher::measured_lines)
        .collect_vec();

    let frame = Frame::around(
        parts
            .iter()
            .flat_map(|p| p.exterior().coords())
            .chain(measured_lines.iter().flatten().flat_map(|l| l.coords())),
    );
    let Some(frame) = frame.map(|f| f.padded(0.05)) else {
        warn!("[SVG] nothing to draw");
        return Document::new();
    };

    let (width, height) = (frame.width() as f32, frame.height() as f32);
    let stroke_width = f32::min(width, height) * 0.001 * options.stroke_width_multiplier;

    //draw the work area
    let work_area_group = {
        let mut group = Group::new().set("id", "work_area");
        let style = &[
            ("fill", &*format!("{}", options.work_area_fill)),
            ("fill-opacity", "0.5"),
            ("fill-rule", "evenodd"),
            ("stroke", "black"),
            ("stroke-width", &*format!("{stroke_width}")),
        ];
        for (i, part) in parts.iter().enumerate() {
            let path = svg_util::data_to_path(svg_util::polygon_data(part, &frame), style)
                .add(Title::new(format!("work area part {i}")));
            group = group.add(path);
        }
        group
    };

    //draw every measured line, and on top of it the portions inside the work area
    let assets_group = {
        let mut group = Group::new().set("id", "assets");
        let (clipped_color, clipped_width) = (options.clipped_stroke, 2.0 * stroke_width);
        let rows = izip!(&job.ids, &job.assets, &job.lengths, &measured_lines);
        for (id, asset, length, lines) in rows {
            let title = format!("asset {id}, {}: {length}", asset.kind());
            let mut asset_group = Group::new()
                .set("id", format!("asset_{id}"))
                .add(Title::new(title));

            let clipped = calculator.clipped_pieces(asset, &job.work_area);
            let strokes = lines
                .iter()
                .map(|l| (l, options.line_stroke, stroke_width))
                .chain(clipped.iter().map(|l| (l, clipped_color, clipped_width)));
            for (line, color, width) in strokes {
                let style = &[
                    ("fill", "none"),
                    ("stroke", &*format!("{color}")),
                    ("stroke-width", &*format!("{width}")),
                    ("stroke-linecap", "round"),
                ];
                let path = svg_util::data_to_path(svg_util::line_data(line, &frame), style);
                asset_group = asset_group.add(path);
            }
            group = group.add(asset_group);
        }
        group
    };

    let label = {
        let label_content = format!(
            "assets: {} | total: {} | {}",
            job.ids.len(),
            job.total(),
            title
        );
        let font_size = f32::min(width, height) * 0.025;
        Text::new(label_content)
            .set("x", 0.0_f32)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let margin = 0.05 * f32::min(width, height);
    let vbox = format!("0 {} {} {}", -margin, width, height + margin);

    Document::new()
        .set("viewBox", vbox)
        .add(work_area_group)
        .add(assets_group)
        .add(label)
}
