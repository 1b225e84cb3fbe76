use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use tui_raycaster::core::{GridMap, PlayerState};
use tui_raycaster::engine::{cast_columns, cast_ray, ray_angle, RayConfig};
use tui_raycaster::types::HitKind;

#[test]
fn every_ray_terminates_within_the_step_budget() {
    let map = GridMap::default_layout();
    let open = GridMap::from_rows(&["........", "........", "........"]).unwrap();
    let cfg = RayConfig::default();

    for i in 0..64 {
        let angle = i as f32 * (2.0 * PI / 64.0);
        for &(x, y) in &[(8.0, 8.0), (1.1, 14.9), (4.5, 2.25)] {
            let hit = cast_ray(&map, x, y, angle, &cfg);
            assert!(hit.steps <= cfg.max_steps());
            assert!(hit.distance <= cfg.max_depth);
        }
        let hit = cast_ray(&open, 4.0, 1.5, angle, &cfg);
        assert_eq!(hit.kind, HitKind::OutOfBounds);
        assert!(hit.steps <= cfg.max_steps());
    }
}

#[test]
fn perpendicular_wall_distance_is_within_one_step() {
    let map = GridMap::default_layout();
    let cfg = RayConfig::default();

    let hit = cast_ray(&map, 8.5, 8.5, 0.0, &cfg);
    assert_eq!(hit.kind, HitKind::Wall);
    assert!((hit.distance - 6.5).abs() <= cfg.step_size + 1e-4, "distance {}", hit.distance);
}

#[test]
fn cell_centre_hit_is_not_a_boundary() {
    let map = GridMap::default_layout();
    let hit = cast_ray(&map, 8.5, 8.5, 0.0, &RayConfig::default());
    assert!(!hit.is_boundary);
}

#[test]
fn ray_along_a_grid_line_reports_a_boundary() {
    let map = GridMap::default_layout();
    let hit = cast_ray(&map, 8.0, 8.0, 0.0, &RayConfig::default());
    assert_eq!(hit.kind, HitKind::Wall);
    assert!(hit.is_boundary);
}

#[test]
fn box_view_hits_walls_in_every_column() {
    let map = GridMap::default_layout();
    let player = PlayerState::new(8.0, 8.0, 0.0);
    let hits = cast_columns(&map, &player, 80, &RayConfig::default());

    assert_eq!(hits.len(), 80);
    for (col, hit) in hits.iter().enumerate() {
        assert_eq!(hit.kind, HitKind::Wall, "column {}", col);
        assert!((4.0..=12.0).contains(&hit.distance), "column {}: {}", col, hit.distance);
    }
}

#[test]
fn diagonal_into_a_room_corner_is_a_boundary() {
    let map = GridMap::default_layout();
    let cfg = RayConfig::default();
    let angle = -3.0 * FRAC_PI_4;

    let hit = cast_ray(&map, 1.5, 1.5, angle, &cfg);
    assert_eq!(hit.kind, HitKind::Wall);
    assert!(hit.is_boundary);

    // The centre column looks straight along the heading.
    let width = 80;
    let player = PlayerState::new(1.5, 1.5, angle);
    let hits = cast_columns(&map, &player, width, &cfg);
    assert!((ray_angle(angle, width / 2, width, cfg.fov) - angle).abs() < 1e-5);
    assert!(hits[(width / 2) as usize].is_boundary);
}

#[test]
fn hits_get_closer_when_walking_towards_a_wall() {
    let map = GridMap::default_layout();
    let cfg = RayConfig::default();
    let far = cast_ray(&map, 8.5, 3.5, FRAC_PI_2, &cfg);
    let near = cast_ray(&map, 12.5, 3.5, FRAC_PI_2, &cfg);
    assert!(near.distance < far.distance);
    assert!(near.steps < far.steps);
}
