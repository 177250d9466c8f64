//! Walkthrough of the probe utilities
//!
//! Builds a tiny in-memory world, walks a few rays through it, casts once
//! against it and feeds a double tap into the gesture detector.
//!
//! Run with `RUST_LOG=debug cargo run --example probe_walkthrough` to see the
//! library's own logging.

use voxel_probe::{
    advance_to_tick, build_ray_query, cast_single, create_gesture_detector, record_input,
    traverse_detailed, BlockFace, GestureConfig, GridCell, MemoryWorld, Point3, ProbeConfig,
    RayQueryDesc, Vector3, VoxelRaycaster,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Stone,
    Glass,
    TallGrass,
}

const CONFIG: &str = r#"
[traversal]
max_steps = 64

[cast]
max_distance = 12.0

[gesture]
event_name = "gesture:double_jump"
"#;

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Voxel Probe Walkthrough");
    println!("=======================");

    let config = ProbeConfig::from_toml_str(CONFIG).expect("Failed to parse demo config");
    config.validate().expect("Demo config should be valid");

    // A glass pane, a wall behind it and some grass in front
    let mut world = MemoryWorld::default();
    world.fill(GridCell::new(4, 0, -2), GridCell::new(4, 3, 2), Block::Glass);
    world.fill(GridCell::new(8, 0, -2), GridCell::new(8, 3, 2), Block::Stone);
    world.set_block(GridCell::new(2, 0, 0), Block::TallGrass);
    println!("World holds {} blocks in {} chunks", world.block_count(), world.loaded_chunks());

    // Walk through everything
    println!("\n-- Traversal through every block --");
    let desc = RayQueryDesc::between(Point3::new(0.5, 0.5, 0.5), Point3::new(10.5, 0.5, 0.5))
        .with_traversal_config(&config.traversal)
        .cast_through();
    let query = build_ray_query(&desc).expect("Failed to build query");
    let report = traverse_detailed(&query, &world, |block| *block == Block::Stone)
        .expect("Memory world lookups cannot fail");
    for entry in &report.entries {
        println!("  {} -> {:?}", entry.cell, entry.content);
    }
    println!("  visited {} cells, stopped: {:?}", report.cells_visited, report.termination);

    // Stop at the first opaque block, looking 30 degrees up
    println!("\n-- Traversal stopping at the first opaque block --");
    let desc = RayQueryDesc::along(Point3::new(0.5, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0), 10.0)
        .with_offsets(0.0, 30.0)
        .with_traversal_config(&config.traversal);
    let query = build_ray_query(&desc).expect("Failed to build query");
    let report = traverse_detailed(&query, &world, |block| *block != Block::TallGrass)
        .expect("Memory world lookups cannot fail");
    match report.blocker() {
        Some(entry) => println!("  blocked by {:?} at {}", entry.content, entry.cell),
        None => println!("  nothing in the way ({:?})", report.termination),
    }

    // Missing target is a configuration error
    let err = build_ray_query(&RayQueryDesc::from_origin(Point3::new(0.0, 0.0, 0.0)))
        .expect_err("A query without a target must be rejected");
    println!("\nRejected query: {}", err);

    // Single cast
    println!("\n-- Single cast --");
    let raycaster = VoxelRaycaster::new(&world, |block: &Block| *block == Block::TallGrass);
    let hit = cast_single(
        &raycaster,
        Point3::new(0.5, 1.5, 0.5),
        Vector3::new(1.0, 0.0, 0.0),
        &config.cast,
    )
    .expect("Memory world lookups cannot fail");
    match hit {
        Some(hit) => {
            println!(
                "  hit {:?} at {} on its {:?} face",
                hit.block, hit.block_origin, hit.face
            );
            println!("  world position {:?}, {:.2} away", hit.world_position, hit.distance);
            if hit.face == BlockFace::West {
                println!("  (entered from the west, as expected)");
            }
        }
        None => println!("  no hit within {}", config.cast.max_distance),
    }

    // Gesture detection
    println!("\n-- Double jump detection --");
    let mut detector = create_gesture_detector(GestureConfig::from(&config.gesture));
    record_input(&mut detector, "steve", 100);
    record_input(&mut detector, "steve", 105);
    for tick in 100..=140 {
        for event in advance_to_tick(&mut detector, tick) {
            println!("  tick {}: {} performed {}", event.tick, event.player_id, event.name);
        }
        if tick == 120 && !record_input(&mut detector, "steve", tick) {
            println!("  tick 120: press ignored, steve is on cooldown");
        }
    }
    println!("  tracked players afterwards: {}", detector.records.len());

    println!("\nDone.");
}
