use terrace::{
    map::{
        core::glam::{IVec2, IVec3},
        Scene, TOP_LAYER,
    },
    read_catalog_file, Config, TerrainEditor,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::error::Error;

const WIDTH: i32 = 24;
const DEPTH: i32 = 16;
const BORDER_X: i32 = 3;
const BORDER_Y: i32 = 2;
const SEED: u64 = 6;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "assets/config.ron".into());
    let catalog_path = args.next().unwrap_or_else(|| "assets/grasslands.ron".into());

    let config = Config::read_file(&config_path)?;
    let catalog = read_catalog_file(&catalog_path)?;
    let family = config.family.clone();
    let ground = config.lowest_height.max(0);

    let mut scene = Scene::new(&catalog);
    let mut editor = TerrainEditor::new(&mut scene, config);

    for x in BORDER_X..WIDTH - BORDER_X {
        for y in BORDER_Y..DEPTH - BORDER_Y {
            editor.place(&family, IVec3::new(x, y, ground))?;
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for x in (2..WIDTH).step_by(3) {
        for y in (2..DEPTH).step_by(3) {
            editor.place(&family, IVec3::new(x, y, ground + rng.gen_range(1..=4)))?;
        }
    }
    let shapes = editor.shapes_performed();

    for y in 0..DEPTH {
        let row: String = (0..WIDTH)
            .map(|x| {
                match scene.highest_tile_z(IVec2::new(x, y), TOP_LAYER, i32::MAX) {
                    Some(z) => std::char::from_digit((z - ground).clamp(0, 9) as u32, 10).unwrap_or('#'),
                    None => '.',
                }
            })
            .collect();
        println!("{}", row);
    }
    println!(
        "{} tiles in {} chunks after {} shapes",
        scene.num_tiles(),
        scene.num_chunks(),
        shapes
    );

    Ok(())
}
