//! One drawing routine per [`FishKind`]
//!
//! Coordinates are expressed as fractions of the surface size so the recipes
//! read the same regardless of canvas dimensions. Fixed pixel extents (body
//! half-widths, eye radii) are absolute.

use glam::vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::helpers::{
    background, fish_body, scales, scales_default, sparkles, BodyColors, GradientAxis,
};
use super::{FishDescriptor, FishKind, DEFAULT_COLOR};
use crate::texture::{hex, parse_css_color, rgba, Canvas, Paint};

/// Paint the routine for `kind` onto `canvas`
pub(crate) fn draw<R: Rng>(kind: FishKind, canvas: &mut Canvas, fish: &FishDescriptor, rng: &mut R) {
    match kind {
        FishKind::IkanKecil => ikan_kecil(canvas),
        FishKind::IkanTuna => ikan_tuna(canvas),
        FishKind::IkanSalmon => ikan_salmon(canvas),
        FishKind::IkanLele => ikan_lele(canvas),
        FishKind::IkanKoi => ikan_koi(canvas),
        FishKind::IkanHiu => ikan_hiu(canvas),
        FishKind::GoldenFish => golden_fish(canvas, rng),
        FishKind::MythicKoi => mythic_koi(canvas, rng),
        FishKind::DragonFish => dragon_fish(canvas, rng),
        FishKind::CrystalFish => crystal_fish(canvas, rng),
        FishKind::OldBoot => old_boot(canvas),
        FishKind::TreasureChest => treasure_chest(canvas, rng),
        FishKind::IkanPari => ikan_pari(canvas, rng),
        FishKind::RainbowFish => rainbow_fish(canvas, rng),
        FishKind::Default => default_fish(canvas, fish),
    }
}

fn size(canvas: &Canvas) -> (f32, f32) {
    (canvas.width() as f32, canvas.height() as f32)
}

fn circle(canvas: &mut Canvas, x: f32, y: f32, r: f32, color: [u8; 4]) {
    canvas.begin_path();
    canvas.arc(x, y, r, 0.0, TAU);
    canvas.set_fill(Paint::solid(color));
    canvas.fill();
}

fn segment(canvas: &mut Canvas, x1: f32, y1: f32, x2: f32, y2: f32) {
    canvas.begin_path();
    canvas.move_to(x1, y1);
    canvas.line_to(x2, y2);
    canvas.stroke();
}

fn triangle(canvas: &mut Canvas, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: [u8; 4]) {
    canvas.begin_path();
    canvas.move_to(a.0, a.1);
    canvas.line_to(b.0, b.1);
    canvas.line_to(c.0, c.1);
    canvas.close_path();
    canvas.set_fill(Paint::solid(color));
    canvas.fill();
}

fn label(canvas: &mut Canvas, text: &str, color: [u8; 4], x: f32, y: f32, size: f32) {
    canvas.set_fill(Paint::solid(color));
    canvas.fill_text(text, x, y, size);
}

/// Radial glow from transparent-edged `color`, covering the whole surface
fn glow(canvas: &mut Canvas, cx: f32, cy: f32, r0: f32, r1: f32, color: [u8; 4]) {
    let (w, h) = size(canvas);
    let edge = [color[0], color[1], color[2], 0];
    let center = vec2(cx, cy);
    canvas.set_fill(Paint::radial(center, r0, center, r1, &[(0.0, color), (1.0, edge)]));
    canvas.fill_rect(0.0, 0.0, w, h);
}

fn ikan_kecil(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a3a5c), hex(0x0d2235), GradientAxis::Horizontal);

    let school = [(0.35, 0.45), (0.55, 0.35), (0.6, 0.6), (0.42, 0.62)];
    for (i, (fx, fy)) in school.into_iter().enumerate() {
        let scale = 0.7 + i as f32 * 0.08;
        let (x, y, bw, bh) = (w * fx, h * fy, 38.0 * scale, 16.0 * scale);
        fish_body(canvas, x, y, bw, bh, BodyColors::new(hex(0xb0c4de), hex(0x8aa8c8)));
        scales(canvas, x, y, bw, bh, hex(0x6a8aab), 2, 3);
    }
}

fn ikan_tuna(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0a2744), hex(0x1a4a7a), GradientAxis::Vertical);
    let (cx, cy) = (w * 0.45, h * 0.5);
    fish_body(canvas, cx, cy, 80.0, 28.0, BodyColors::new(hex(0x2e6ea6), hex(0x1a4a7a)).eye(hex(0x222222)));
    scales_default(canvas, cx, cy, 80.0, 28.0, hex(0x5dade2));

    // Lateral stripe
    canvas.save();
    canvas.set_global_alpha(0.3);
    canvas.set_stroke(Paint::solid(hex(0x87ceeb)));
    canvas.set_line_width(4.0);
    segment(canvas, w * 0.15, h * 0.45, w * 0.75, h * 0.45);
    canvas.restore();

    label(canvas, "TUNA", rgba(255, 255, 255, 0.7), w * 0.45, h * 0.88, 14.0);
}

fn ikan_salmon(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a0a0a), hex(0x3d1a0a), GradientAxis::Horizontal);
    let (cx, cy) = (w * 0.47, h * 0.5);
    fish_body(canvas, cx, cy, 78.0, 26.0, BodyColors::new(hex(0xe8885a), hex(0xc06030)).eye(hex(0x333333)));
    scales_default(canvas, cx, cy, 78.0, 26.0, hex(0xff9966));

    canvas.save();
    canvas.set_global_alpha(0.35);
    canvas.set_stroke(Paint::solid(hex(0xff6b9d)));
    canvas.set_line_width(5.0);
    canvas.begin_path();
    canvas.move_to(w * 0.12, h * 0.52);
    canvas.cubic_to(w * 0.3, h * 0.4, w * 0.6, h * 0.55, w * 0.82, h * 0.5);
    canvas.stroke();
    canvas.restore();

    label(canvas, "SALMON", rgba(255, 200, 150, 0.8), w * 0.47, h * 0.9, 13.0);
}

fn ikan_lele(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a1208), hex(0x2d2010), GradientAxis::Horizontal);

    // Elongated body
    canvas.begin_path();
    canvas.ellipse(w * 0.42, h * 0.5, 85.0, 22.0, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::solid(hex(0x6b5a3e)));
    canvas.fill();
    triangle(canvas, (w * 0.12, h * 0.5), (w * 0.04, h * 0.25), (w * 0.04, h * 0.75), hex(0x4a3a28));

    // Whiskers
    canvas.save();
    canvas.set_stroke(Paint::solid(hex(0x3a2a18)));
    canvas.set_line_width(2.5);
    let whiskers = [
        (0.82, 0.38, 0.95, 0.22),
        (0.82, 0.38, 0.97, 0.35),
        (0.82, 0.6, 0.95, 0.76),
        (0.82, 0.6, 0.97, 0.63),
    ];
    for (x1, y1, x2, y2) in whiskers {
        segment(canvas, w * x1, h * y1, w * x2, h * y2);
    }
    canvas.restore();

    circle(canvas, w * 0.75, h * 0.42, 7.0, hex(0xffffff));
    circle(canvas, w * 0.76, h * 0.42, 4.0, hex(0x111111));

    label(canvas, "LELE", rgba(180, 150, 100, 0.8), w * 0.42, h * 0.9, 13.0);
}

fn ikan_koi(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0d1f1a), hex(0x1a3d2a), GradientAxis::Horizontal);
    let (cx, cy) = (w * 0.46, h * 0.5);
    fish_body(canvas, cx, cy, 76.0, 28.0, BodyColors::new(hex(0xff6b35), hex(0xcc4400)).eye(hex(0x222222)));

    canvas.save();
    canvas.set_global_alpha(0.75);
    for (fx, fy, r) in [(0.38, 0.42, 14.0), (0.52, 0.56, 10.0), (0.3, 0.52, 8.0)] {
        circle(canvas, w * fx, h * fy, r, hex(0xffffff));
    }
    canvas.restore();

    scales_default(canvas, cx, cy, 76.0, 28.0, hex(0xff9966));
    label(canvas, "KOI", rgba(255, 180, 80, 0.85), w * 0.46, h * 0.9, 13.0);
}

fn ikan_hiu(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x050d1a), hex(0x0a1f35), GradientAxis::Horizontal);

    // Torpedo body
    canvas.begin_path();
    canvas.move_to(w * 0.88, h * 0.5);
    canvas.cubic_to(w * 0.75, h * 0.2, w * 0.2, h * 0.28, w * 0.05, h * 0.5);
    canvas.cubic_to(w * 0.2, h * 0.72, w * 0.75, h * 0.8, w * 0.88, h * 0.5);
    canvas.set_fill(Paint::solid(hex(0x607080)));
    canvas.fill();

    // Pale belly
    canvas.begin_path();
    canvas.ellipse(w * 0.45, h * 0.56, 60.0, 14.0, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::solid(hex(0xb0bec5)));
    canvas.fill();

    triangle(canvas, (w * 0.42, h * 0.28), (w * 0.55, h * 0.06), (w * 0.65, h * 0.28), hex(0x506070));

    circle(canvas, w * 0.74, h * 0.44, 6.0, hex(0x000000));
    circle(canvas, w * 0.73, h * 0.43, 2.0, hex(0xffffff));

    // Teeth
    for i in 0..4 {
        let dx = i as f32 * 4.0;
        triangle(
            canvas,
            (w * 0.83 + dx, h * 0.48),
            (w * 0.835 + dx, h * 0.56),
            (w * 0.84 + dx, h * 0.48),
            hex(0xffffff),
        );
    }

    label(canvas, "HIU", rgba(150, 200, 220, 0.8), w * 0.45, h * 0.9, 14.0);
}

fn golden_fish<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a1200), hex(0x2d2000), GradientAxis::Horizontal);
    let (cx, cy) = (w * 0.45, h * 0.5);
    glow(canvas, cx, cy, 10.0, 70.0, rgba(255, 215, 0, 0.25));
    fish_body(canvas, cx, cy, 72.0, 26.0, BodyColors::new(hex(0xf1c40f), hex(0xd4a017)).eye(hex(0x222222)));
    scales_default(canvas, cx, cy, 72.0, 26.0, hex(0xffd700));
    sparkles(canvas, rng, 8, hex(0xffe066), 2.0, 4.0);
    label(canvas, "✨ GOLDEN", hex(0xffe066), cx, h * 0.9, 13.0);
}

fn mythic_koi<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0d0020), hex(0x1a0035), GradientAxis::Horizontal);
    let (cx, cy) = (w * 0.46, h * 0.5);
    glow(canvas, cx, cy, 5.0, 80.0, rgba(180, 0, 255, 0.3));
    fish_body(canvas, cx, cy, 78.0, 28.0, BodyColors::new(hex(0xdd00ff), hex(0x8800cc)).eye(hex(0xffffff)));

    // Gold spots
    for (fx, fy, r) in [(0.35, 0.4, 12.0), (0.5, 0.58, 8.0), (0.28, 0.52, 6.0)] {
        let center = vec2(w * fx, h * fy);
        canvas.begin_path();
        canvas.arc(center.x, center.y, r, 0.0, TAU);
        canvas.set_fill(Paint::radial(center, 0.0, center, r, &[(0.0, hex(0xffe066)), (1.0, hex(0xff9900))]));
        canvas.fill();
    }

    sparkles(canvas, rng, 12, hex(0xcc88ff), 1.0, 3.0);
    label(canvas, "🌟 MYTHIC KOI", hex(0xee88ff), cx, h * 0.9, 13.0);
}

fn dragon_fish<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a0000), hex(0x330000), GradientAxis::Horizontal);

    // Flames trailing behind
    let flame_stops = [
        (0.0, rgba(255, 200, 0, 0.7)),
        (0.5, rgba(255, 80, 0, 0.4)),
        (1.0, rgba(255, 0, 0, 0.0)),
    ];
    for i in 0..6 {
        let x = w * (0.05 + i as f32 * 0.06);
        let fy = h * 0.5;
        canvas.set_fill(Paint::radial(vec2(x, fy), 2.0, vec2(x, fy - 20.0), 18.0, &flame_stops));
        canvas.begin_path();
        canvas.ellipse(x, fy - 10.0, 6.0, 20.0, 0.0, 0.0, TAU);
        canvas.fill();
    }

    let (cx, cy) = (w * 0.46, h * 0.5);
    fish_body(canvas, cx, cy, 80.0, 28.0, BodyColors::new(hex(0xcc2200), hex(0x880000)).eye(hex(0xff0000)));

    // Chevron scales
    canvas.save();
    canvas.set_global_alpha(0.4);
    canvas.set_stroke(Paint::solid(hex(0xff4422)));
    canvas.set_line_width(1.5);
    for r in 0..3 {
        for c in 0..6 {
            let sx = w * 0.15 + c as f32 * 20.0;
            let sy = h * 0.38 + r as f32 * 14.0;
            canvas.begin_path();
            canvas.move_to(sx, sy);
            canvas.line_to(sx + 8.0, sy - 8.0);
            canvas.line_to(sx + 16.0, sy);
            canvas.stroke();
        }
    }
    canvas.restore();

    // Horns
    for (fx, fy) in [(0.72, 0.22), (0.78, 0.18)] {
        let (x, y) = (w * fx, h * fy);
        triangle(canvas, (x, h * 0.3), (x - 4.0, y), (x + 4.0, y), hex(0xaa3300));
    }

    sparkles(canvas, rng, 6, hex(0xff4400), 2.0, 4.0);
    label(canvas, "🐉 DRAGON", hex(0xff8866), cx, h * 0.9, 13.0);
}

fn crystal_fish<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x001a2a), hex(0x003344), GradientAxis::Horizontal);

    // Background facets
    canvas.save();
    canvas.set_global_alpha(0.15);
    canvas.set_fill(Paint::solid(hex(0x00ffff)));
    for _ in 0..8 {
        let x = rng.random::<f32>() * w;
        let y = rng.random::<f32>() * h;
        canvas.begin_path();
        canvas.move_to(x, y - 12.0);
        canvas.line_to(x + 7.0, y);
        canvas.line_to(x, y + 12.0);
        canvas.line_to(x - 7.0, y);
        canvas.close_path();
        canvas.fill();
    }
    canvas.restore();

    // Translucent body with outline
    canvas.save();
    canvas.begin_path();
    canvas.ellipse(w * 0.45, h * 0.5, 76.0, 26.0, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::linear(
        vec2(w * 0.1, h * 0.2),
        vec2(w * 0.8, h * 0.8),
        &[
            (0.0, rgba(180, 255, 255, 0.85)),
            (0.5, rgba(0, 200, 220, 0.7)),
            (1.0, rgba(0, 150, 180, 0.85)),
        ],
    ));
    canvas.fill();
    canvas.set_stroke(Paint::solid(rgba(200, 255, 255, 0.9)));
    canvas.set_line_width(2.0);
    canvas.stroke();
    canvas.restore();

    canvas.save();
    canvas.set_stroke(Paint::solid(rgba(255, 255, 255, 0.5)));
    canvas.set_line_width(1.2);
    for (x1, y1, x2, y2) in [(0.25, 0.35, 0.45, 0.65), (0.45, 0.3, 0.6, 0.7), (0.2, 0.5, 0.7, 0.5)] {
        segment(canvas, w * x1, h * y1, w * x2, h * y2);
    }
    canvas.restore();

    triangle(canvas, (w * 0.12, h * 0.5), (w * 0.02, h * 0.2), (w * 0.02, h * 0.8), rgba(0, 220, 255, 0.7));

    circle(canvas, w * 0.73, h * 0.44, 7.0, rgba(255, 255, 255, 0.9));
    circle(canvas, w * 0.74, h * 0.44, 4.0, hex(0x00ccdd));

    sparkles(canvas, rng, 14, hex(0xaaffff), 1.0, 3.0);
    label(canvas, "💎 CRYSTAL", hex(0xaaffff), w * 0.45, h * 0.9, 13.0);
}

fn old_boot(canvas: &mut Canvas) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x1a1208), hex(0x0d0a05), GradientAxis::Horizontal);

    canvas.save();
    canvas.set_line_width(2.0);

    // Shaft
    canvas.begin_path();
    canvas.round_rect(w * 0.35, h * 0.1, w * 0.25, h * 0.5, [8.0; 4]);
    canvas.set_fill(Paint::solid(hex(0x4a3820)));
    canvas.fill();
    canvas.set_stroke(Paint::solid(hex(0x2a1a08)));
    canvas.stroke();

    // Sole
    canvas.begin_path();
    canvas.round_rect(w * 0.25, h * 0.55, w * 0.45, h * 0.22, [0.0, 0.0, 8.0, 8.0]);
    canvas.set_fill(Paint::solid(hex(0x333333)));
    canvas.fill();
    canvas.set_stroke(Paint::solid(hex(0x111111)));
    canvas.stroke();

    // Lace holes
    for i in 0..3 {
        let y = h * (0.22 + i as f32 * 0.12);
        circle(canvas, w * 0.43, y, 4.0, hex(0x1a1008));
        circle(canvas, w * 0.57, y, 4.0, hex(0x1a1008));
    }

    // Algae
    canvas.set_stroke(Paint::solid(hex(0x2d6a2d)));
    for (fx, fy) in [(0.3, 0.55), (0.65, 0.52), (0.25, 0.6)] {
        let (x, y) = (w * fx, h * fy);
        canvas.begin_path();
        canvas.move_to(x, y);
        canvas.quad_to(x - 8.0, y - 15.0, x - 3.0, y - 25.0);
        canvas.stroke();
        canvas.begin_path();
        canvas.move_to(x, y);
        canvas.quad_to(x + 8.0, y - 12.0, x + 5.0, y - 22.0);
        canvas.stroke();
    }
    canvas.restore();

    label(canvas, "👟 OLD BOOT", rgba(150, 120, 80, 0.8), w * 0.5, h * 0.92, 13.0);
}

fn treasure_chest<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0d0800), hex(0x1a1000), GradientAxis::Horizontal);
    glow(canvas, w * 0.5, h * 0.5, 5.0, 65.0, rgba(255, 200, 0, 0.3));

    canvas.save();

    // Chest
    canvas.begin_path();
    canvas.round_rect(w * 0.2, h * 0.38, w * 0.6, h * 0.42, [6.0; 4]);
    canvas.set_fill(Paint::solid(hex(0x5c3a10)));
    canvas.fill();
    canvas.set_stroke(Paint::solid(hex(0x3a2008)));
    canvas.set_line_width(3.0);
    canvas.stroke();

    // Lid, slightly open
    canvas.begin_path();
    canvas.move_to(w * 0.2, h * 0.38);
    canvas.line_to(w * 0.8, h * 0.38);
    canvas.line_to(w * 0.78, h * 0.2);
    canvas.line_to(w * 0.22, h * 0.2);
    canvas.close_path();
    canvas.set_fill(Paint::solid(hex(0x6b4515)));
    canvas.fill();
    canvas.stroke();

    // Spilled coins
    canvas.set_fill(Paint::solid(hex(0xf1c40f)));
    canvas.set_stroke(Paint::solid(hex(0xd4a017)));
    canvas.set_line_width(1.0);
    for (fx, fy) in [(0.38, 0.32), (0.48, 0.26), (0.58, 0.3), (0.44, 0.36)] {
        canvas.begin_path();
        canvas.ellipse(w * fx, h * fy, 9.0, 6.0, 0.3, 0.0, TAU);
        canvas.fill();
        canvas.stroke();
    }

    // Lock
    canvas.begin_path();
    canvas.arc(w * 0.5, h * 0.58, 7.0, 0.0, TAU);
    canvas.fill();
    canvas.set_line_width(2.0);
    canvas.stroke();

    // Metal straps
    canvas.set_line_width(3.0);
    segment(canvas, w * 0.5, h * 0.38, w * 0.5, h * 0.8);
    segment(canvas, w * 0.2, h * 0.58, w * 0.8, h * 0.58);
    canvas.restore();

    sparkles(canvas, rng, 8, hex(0xffe066), 1.0, 3.0);
    label(canvas, "📦 TREASURE", hex(0xffe066), w * 0.5, h * 0.95, 12.0);
}

fn ikan_pari<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0a0a1a), hex(0x0d1530), GradientAxis::Horizontal);

    canvas.save();

    // Diamond-shaped wings
    canvas.begin_path();
    canvas.move_to(w * 0.5, h * 0.08);
    canvas.cubic_to(w * 0.85, h * 0.15, w * 0.92, h * 0.55, w * 0.5, h * 0.62);
    canvas.cubic_to(w * 0.08, h * 0.55, w * 0.15, h * 0.15, w * 0.5, h * 0.08);
    canvas.set_fill(Paint::solid(hex(0x7b2d8b)));
    canvas.fill();

    // Tail
    canvas.begin_path();
    canvas.move_to(w * 0.5, h * 0.62);
    canvas.cubic_to(w * 0.55, h * 0.75, w * 0.48, h * 0.9, w * 0.5, h * 0.98);
    canvas.set_stroke(Paint::solid(hex(0x5a1f6b)));
    canvas.set_line_width(5.0);
    canvas.stroke();

    canvas.set_global_alpha(0.2);
    canvas.begin_path();
    canvas.ellipse(w * 0.5, h * 0.35, 25.0, 15.0, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::solid(hex(0xcc66ee)));
    canvas.fill();
    canvas.restore();

    for (fx, fy) in [(0.38, 0.28), (0.62, 0.28)] {
        let (x, y) = (w * fx, h * fy);
        circle(canvas, x, y, 5.0, hex(0xffffff));
        circle(canvas, x + 1.0, y, 3.0, hex(0x222222));
    }

    sparkles(canvas, rng, 6, hex(0xcc88ee), 1.0, 3.0);
    label(canvas, "PARI", rgba(200, 150, 220, 0.85), w * 0.5, h * 0.92, 13.0);
}

fn rainbow_fish<R: Rng>(canvas: &mut Canvas, rng: &mut R) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0a0a15), hex(0x15152a), GradientAxis::Horizontal);

    canvas.begin_path();
    canvas.ellipse(w * 0.45, h * 0.5, 76.0, 28.0, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::linear(
        vec2(w * 0.1, h * 0.2),
        vec2(w * 0.8, h * 0.8),
        &[
            (0.0, hex(0xff0066)),
            (0.2, hex(0xff6600)),
            (0.4, hex(0xffcc00)),
            (0.6, hex(0x00cc44)),
            (0.8, hex(0x0088ff)),
            (1.0, hex(0x8800ff)),
        ],
    ));
    canvas.fill();

    // Half-disc scales cycling through the palette
    const SCALE_COLORS: [u32; 6] = [0xff6699, 0xff9933, 0xffee00, 0x33cc44, 0x3399ff, 0xcc66ff];
    canvas.save();
    canvas.set_global_alpha(0.4);
    for r in 0..4 {
        for c in 0..7 {
            let x = w * 0.14 + c as f32 * 17.0;
            let y = h * 0.32 + r as f32 * 12.0;
            canvas.begin_path();
            canvas.arc(x, y, 6.0, PI, TAU);
            canvas.set_fill(Paint::solid(hex(SCALE_COLORS[(r + c) % SCALE_COLORS.len()])));
            canvas.fill();
        }
    }
    canvas.restore();

    canvas.begin_path();
    canvas.move_to(w * 0.1, h * 0.5);
    canvas.line_to(w * 0.01, h * 0.15);
    canvas.line_to(w * 0.01, h * 0.85);
    canvas.close_path();
    canvas.set_fill(Paint::linear(
        vec2(0.0, 0.0),
        vec2(0.0, h),
        &[(0.0, hex(0xff0066)), (0.5, hex(0x00cc44)), (1.0, hex(0x8800ff))],
    ));
    canvas.fill();

    circle(canvas, w * 0.73, h * 0.44, 7.0, hex(0xffffff));
    circle(canvas, w * 0.74, h * 0.44, 4.0, hex(0x111111));

    sparkles(canvas, rng, 12, hex(0xffffff), 1.0, 3.0);
    label(canvas, "🌈 RAINBOW", rgba(255, 255, 255, 0.9), w * 0.45, h * 0.91, 13.0);
}

/// Body tint for the generic routine; missing, empty or unparseable colours
/// use [`DEFAULT_COLOR`]
fn body_tint(fish: &FishDescriptor) -> [u8; 4] {
    let requested = fish.color.as_deref().map(str::trim).filter(|c| !c.is_empty());
    if let Some(color) = requested {
        match parse_css_color(color) {
            Ok(tint) => return tint,
            Err(err) => {
                tracing::warn!(fish = %fish.name, %err, fallback = DEFAULT_COLOR, "Unusable fish colour");
            }
        }
    }
    parse_css_color(DEFAULT_COLOR).unwrap_or_default()
}

fn default_fish(canvas: &mut Canvas, fish: &FishDescriptor) {
    let (w, h) = size(canvas);
    background(canvas, hex(0x0a1a2a), hex(0x0d2235), GradientAxis::Horizontal);
    let (cx, cy) = (w * 0.45, h * 0.5);
    fish_body(canvas, cx, cy, 70.0, 25.0, BodyColors::new(body_tint(fish), hex(0x3a8ab5)));
    scales_default(canvas, cx, cy, 70.0, 25.0, hex(0x88ccee));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureBuffer;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn render(kind: FishKind, fish: &FishDescriptor, seed: u64) -> TextureBuffer {
        let mut canvas = Canvas::new(256, 128);
        let mut rng = Pcg32::seed_from_u64(seed);
        draw(kind, &mut canvas, fish, &mut rng);
        canvas.into_buffer()
    }

    #[test]
    fn test_every_routine_covers_the_surface() {
        let fish = FishDescriptor::new("any");
        for kind in FishKind::NAMED.into_iter().chain([FishKind::Default]) {
            let buf = render(kind, &fish, 3);
            assert!(
                buf.pixels.chunks_exact(4).all(|p| p[3] == 255),
                "{kind} left transparent pixels"
            );
        }
    }

    #[test]
    fn test_routines_differ() {
        let fish = FishDescriptor::new("any");
        let tuna = render(FishKind::IkanTuna, &fish, 1);
        let hiu = render(FishKind::IkanHiu, &fish, 1);
        let koi = render(FishKind::IkanKoi, &fish, 1);
        assert_ne!(tuna, hiu);
        assert_ne!(tuna, koi);
        assert_ne!(hiu, koi);
    }

    #[test]
    fn test_deterministic_routines_ignore_rng() {
        let fish = FishDescriptor::new("any");
        for kind in FishKind::NAMED.into_iter().filter(|k| !k.uses_randomness()) {
            assert_eq!(render(kind, &fish, 1), render(kind, &fish, 2), "{kind}");
        }
    }

    #[test]
    fn test_sparkle_routines_follow_rng() {
        let fish = FishDescriptor::new("any");
        for kind in FishKind::NAMED.into_iter().filter(|k| k.uses_randomness()) {
            assert_eq!(render(kind, &fish, 5), render(kind, &fish, 5), "{kind}");
            assert_ne!(render(kind, &fish, 5), render(kind, &fish, 6), "{kind}");
        }
    }

    #[test]
    fn test_default_uses_descriptor_color() {
        let red = FishDescriptor::new("Zzz").with_color("#ff0000");
        let buf = render(FishKind::Default, &red, 0);
        // Inside the body, clear of scales and eye
        assert_eq!(buf.get_pixel(105, 72), hex(0xff0000));

        let plain = render(FishKind::Default, &FishDescriptor::new("Zzz"), 0);
        assert_eq!(plain.get_pixel(105, 72), hex(0x5dade2));
    }

    #[test]
    fn test_default_bad_color_falls_back() {
        let bad = FishDescriptor::new("Zzz").with_color("not-a-colour");
        let empty = FishDescriptor::new("Zzz").with_color("");
        let plain = render(FishKind::Default, &FishDescriptor::new("Zzz"), 0);
        assert_eq!(render(FishKind::Default, &bad, 0), plain);
        assert_eq!(render(FishKind::Default, &empty, 0), plain);
    }

    #[test]
    fn test_named_routines_ignore_descriptor_color() {
        let plain = FishDescriptor::new("Ikan Koi");
        let tinted = FishDescriptor::new("Ikan Koi").with_color("#00ff00");
        assert_eq!(render(FishKind::IkanKoi, &plain, 0), render(FishKind::IkanKoi, &tinted, 0));
    }
}
