//! Drawing the map onto a pixel display.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::{
    axis::{Axis, Orient},
    chart::HeatMap,
};

const INK: Rgb888 = Rgb888::BLACK;

/// Distance between a tick mark and its label.
const LABEL_GAP: f64 = 3.0;

fn point(x: f64, y: f64) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Rectangle covering `[x0, x1) x [y0, y1)`, snapped to pixels so neighbors don't overlap or gap.
fn snapped(x0: f64, y0: f64, x1: f64, y1: f64) -> Rectangle {
    let a = point(x0, y0);
    let b = point(x1, y1);
    Rectangle::new(
        a,
        Size::new((b.x - a.x).max(0) as u32, (b.y - a.y).max(0) as u32),
    )
}

fn color(c: colorbrewer::Color) -> Rgb888 {
    Rgb888::new(c.r(), c.g(), c.b())
}

/// Draw the whole map onto the target, which should be at least [HeatMap::size] large.
pub fn draw<D>(map: &HeatMap, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(Rgb888::WHITE)?;

    let (left, top) = map.plot_origin();
    for cell in &map.cells {
        let (x, y) = (left + cell.x, top + cell.y);
        snapped(x, y, x + cell.width, y + cell.height)
            .into_styled(PrimitiveStyle::with_fill(color(cell.color)))
            .draw(target)?;
    }
    tracing::trace!("drew {} cells", map.cells.len());

    draw_axis(&map.y_axis, (left, top), target)?;
    draw_axis(&map.x_axis, (left, top + map.plot_size.1), target)?;

    let (lx, ly) = map.legend_origin;
    let band_height = map.legend.band_height;
    for band in &map.legend.bands {
        snapped(lx + band.x, ly, lx + band.x + band.width, ly + band_height)
            .into_styled(PrimitiveStyle::with_fill(color(band.color)))
            .draw(target)?;
    }
    draw_axis(&map.legend.axis, (lx, ly + band_height), target)?;
    Ok(())
}

/// Draw an axis with its origin at `(ox, oy)`.
fn draw_axis<D>(axis: &Axis, (ox, oy): (f64, f64), target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let stroke = PrimitiveStyle::with_stroke(INK, 1);
    let font = MonoTextStyle::new(&FONT_6X10, INK);
    let (r0, r1) = axis.range;
    let inner = axis.inner_tick_size;
    let outer = axis.outer_tick_size;

    match axis.orient {
        Orient::Left => {
            Line::new(point(ox, oy + r0), point(ox, oy + r1))
                .into_styled(stroke)
                .draw(target)?;
            if outer > 0.0 {
                for r in [r0, r1] {
                    Line::new(point(ox - outer, oy + r), point(ox, oy + r))
                        .into_styled(stroke)
                        .draw(target)?;
                }
            }
            let style = TextStyleBuilder::new()
                .alignment(Alignment::Right)
                .baseline(Baseline::Middle)
                .build();
            for tick in &axis.ticks {
                let y = oy + tick.position;
                Line::new(point(ox - inner, y), point(ox, y))
                    .into_styled(stroke)
                    .draw(target)?;
                Text::with_text_style(&tick.label, point(ox - inner - LABEL_GAP, y), font, style)
                    .draw(target)?;
            }
        }
        Orient::Bottom => {
            Line::new(point(ox + r0, oy), point(ox + r1, oy))
                .into_styled(stroke)
                .draw(target)?;
            if outer > 0.0 {
                for r in [r0, r1] {
                    Line::new(point(ox + r, oy), point(ox + r, oy + outer))
                        .into_styled(stroke)
                        .draw(target)?;
                }
            }
            let style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Top)
                .build();
            for tick in &axis.ticks {
                let x = ox + tick.position;
                Line::new(point(x, oy), point(x, oy + inner))
                    .into_styled(stroke)
                    .draw(target)?;
                Text::with_text_style(&tick.label, point(x, oy + inner + LABEL_GAP), font, style)
                    .draw(target)?;
            }
        }
    }
    Ok(())
}
