//! Single-vein placement matching the game's minable generator.

use rand::Rng;

use crate::blocks::{BlockKind, OreKind, Sample};
use crate::geometry::Position;

use super::trig;

/// Places one vein of `kind` centered near `(cx, cy, cz)` into the sample.
///
/// The vein is a chain of overlapping ellipsoids stretched along a random
/// horizontal orientation. Only rock blocks are replaced; coordinates
/// falling outside the sample are skipped, so veins centered near or past
/// an edge contribute partial blocks, exactly like a sample cut out of a
/// larger world would.
pub fn generate_vein<R: Rng>(
    sample: &mut Sample,
    rng: &mut R,
    kind: OreKind,
    cx: i32,
    cy: i32,
    cz: i32,
) {
    let spec = kind.vein_spec();
    let max_size = spec.max_vein_size as f64;

    // random horizontal orientation of the vein axis
    let angle = rng.gen::<f64>() * std::f64::consts::PI;
    let sin_a = trig::sin(angle);
    let cos_a = trig::cos(angle);

    let shifted_x = (cx + 8) as f64;
    let shifted_z = (cz + 8) as f64;
    let high_x = shifted_x + sin_a * max_size / 8.0;
    let low_x = shifted_x - sin_a * max_size / 8.0;
    let high_z = shifted_z + cos_a * max_size / 8.0;
    let low_z = shifted_z - cos_a * max_size / 8.0;
    let high_y = (cy + rng.gen_range(0..3) - 2) as f64;
    let low_y = (cy + rng.gen_range(0..3) - 2) as f64;

    for size in 0..=spec.max_vein_size {
        let t = size as f64 / max_size;
        let center_x = high_x + (low_x - high_x) * t;
        let center_y = high_y + (low_y - high_y) * t;
        let center_z = high_z + (low_z - high_z) * t;

        let rand_size = rng.gen::<f64>() * max_size / 16.0;
        let diameter = (trig::sin(t * std::f64::consts::PI) + 1.0) * rand_size + 1.0;
        let radius = diameter / 2.0;

        for x in trig::floor(center_x - radius)..=trig::floor(center_x + radius) {
            let nx = (x as f64 + 0.5 - center_x) / radius;
            let sq_nx = nx * nx;
            if sq_nx >= 1.0 {
                continue;
            }
            for y in trig::floor(center_y - radius)..=trig::floor(center_y + radius) {
                let ny = (y as f64 + 0.5 - center_y) / radius;
                let sq_ny = ny * ny;
                if sq_nx + sq_ny >= 1.0 {
                    continue;
                }
                for z in trig::floor(center_z - radius)..=trig::floor(center_z + radius) {
                    let nz = (z as f64 + 0.5 - center_z) / radius;
                    if sq_nx + sq_ny + nz * nz >= 1.0 {
                        continue;
                    }
                    if !sample.dimensions().contains(x as i64, y as i64, z as i64) {
                        continue;
                    }
                    let index = sample
                        .dimensions()
                        .index_of(Position::new(x as usize, y as usize, z as usize));
                    if sample.block(index) == BlockKind::Rock {
                        sample.set_block(index, BlockKind::Ore(kind));
                    }
                }
            }
        }
    }
}
