use tui_raycaster::core::{GridMap, PlayerState};
use tui_raycaster::engine::{cast_columns, RayConfig};
use tui_raycaster::term::{is_wall_glyph, FrameBuffer, Scene, SceneView};
use tui_raycaster::types::PLAYER_MARKER;

fn render(player: PlayerState, width: u16, height: u16, fps: Option<f32>) -> FrameBuffer {
    let map = GridMap::default_layout();
    let cfg = RayConfig::default();
    let hits = cast_columns(&map, &player, width, &cfg);
    let scene = Scene {
        map: &map,
        player: &player,
        hits: &hits,
        max_depth: cfg.max_depth,
        fps,
    };
    SceneView::default().render(&scene, width, height)
}

#[test]
fn map_overlay_starts_below_the_status_line() {
    let fb = render(PlayerState::new(8.0, 8.0, 0.0), 80, 24, Some(60.0));

    let row1: String = fb.row_text(1).chars().take(16).collect();
    assert_eq!(row1, "#".repeat(16));
    let row2: String = fb.row_text(2).chars().take(16).collect();
    assert_eq!(row2, "#..............#");
    let row16: String = fb.row_text(16).chars().take(16).collect();
    assert_eq!(row16, "################");
}

#[test]
fn player_marker_sits_on_the_player_cell() {
    let fb = render(PlayerState::new(3.7, 5.2, 1.0), 80, 24, Some(60.0));
    // Cell (3, 5) drawn one row down.
    assert_eq!(fb.get(3, 6).unwrap().ch, PLAYER_MARKER);

    // Row 0 is the status line, whose `FPS=` label also contains a `P`.
    let markers = (1..fb.height())
        .map(|y| fb.row_text(y).chars().filter(|&c| c == PLAYER_MARKER).count())
        .sum::<usize>();
    assert_eq!(markers, 1);
}

#[test]
fn status_line_is_formatted_and_truncated() {
    let wide = render(PlayerState::new(8.0, 8.0, 0.0), 80, 24, Some(60.0));
    assert!(wide
        .row_text(0)
        .starts_with("X=8.00, Y=8.00, A=0.00, FPS=60.00"));

    let narrow = render(PlayerState::new(8.0, 8.0, 0.0), 20, 24, Some(60.0));
    assert_eq!(narrow.row_text(0), "X=8.00, Y=8.00, A=0.");
}

#[test]
fn status_heading_is_wrapped_for_display() {
    let fb = render(PlayerState::new(8.0, 8.0, -1.0), 80, 24, None);
    // -1 + 2π
    assert!(fb.row_text(0).starts_with("X=8.00, Y=8.00, A=5.28, FPS=inf"));
}

#[test]
fn walls_fill_the_horizon_outside_the_overlay() {
    let fb = render(PlayerState::new(8.0, 8.0, 0.0), 80, 24, Some(60.0));
    // Column 30 looks slightly left of straight ahead, about 7 units from the wall.
    assert!(is_wall_glyph(fb.get(30, 12).unwrap().ch));
    // Bottom row is floor.
    assert_eq!(fb.get(70, 23).unwrap().ch, '#');
}

#[test]
fn overlay_can_be_turned_off() {
    let map = GridMap::default_layout();
    let player = PlayerState::new(8.0, 8.0, 0.0);
    let cfg = RayConfig::default();
    let hits = cast_columns(&map, &player, 40, &cfg);
    let scene = Scene {
        map: &map,
        player: &player,
        hits: &hits,
        max_depth: cfg.max_depth,
        fps: Some(30.0),
    };
    let fb = SceneView::default().with_map(false).render(&scene, 40, 24);
    assert!(!fb.row_text(9).contains(PLAYER_MARKER));
    assert!(fb.row_text(0).starts_with("X=8.00"));
}
