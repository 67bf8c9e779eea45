//! Interactive 3D viewer using kiss3d.

use std::time::Instant;

use kiss3d::event::{Action, Key, Modifiers, MouseButton, WindowEvent};
use kiss3d::prelude::*;

use cubeturn::cubie::{Axis, Cubie, Sticker};
use cubeturn::input::{self, Affordance, PointerButton, AFFORDANCE_HALF_SIZE};
use cubeturn::Session;

/// Edge length of a cubie body (slightly smaller than 1.0 for visible gaps).
const CUBIE_SIZE: f32 = 0.96;
/// Edge length of a sticker.
const STICKER_SIZE: f32 = 0.86;
/// Thickness of a sticker.
const STICKER_THICKNESS: f32 = 0.02;
/// Cursor travel, in pixels, above which a press-release is a camera drag.
const CLICK_SLOP: f64 = 4.0;

fn to_kiss_vec3(v: glam::Vec3) -> Vec3 {
    Vec3::from_array(v.to_array())
}

fn to_kiss_quat(q: glam::Quat) -> Quat {
    Quat::from_array(q.to_array())
}

fn color_from_rgb([r, g, b]: [f32; 3]) -> Color {
    Color::new(r, g, b, 1.0)
}

/// Maps the digit keys used by the bindings table.
fn key_char(key: Key) -> Option<char> {
    match key {
        Key::Key1 => Some('1'),
        Key::Key2 => Some('2'),
        Key::Key3 => Some('3'),
        Key::Key4 => Some('4'),
        Key::Key5 => Some('5'),
        Key::Key6 => Some('6'),
        Key::Key7 => Some('7'),
        Key::Key8 => Some('8'),
        Key::Key9 => Some('9'),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Button1 => Some(PointerButton::Primary),
        MouseButton::Button2 => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Adds one sticker to a cubie node, flush against the face it belongs to.
fn add_sticker(node: &mut SceneNode3d, sticker: &Sticker) {
    let (width, height, depth) = match sticker.axis {
        Axis::X => (STICKER_THICKNESS, STICKER_SIZE, STICKER_SIZE),
        Axis::Y => (STICKER_SIZE, STICKER_THICKNESS, STICKER_SIZE),
        Axis::Z => (STICKER_SIZE, STICKER_SIZE, STICKER_THICKNESS),
    };
    node.add_cube(width, height, depth)
        .set_color(color_from_rgb(sticker.color.rgb()))
        .set_position(to_kiss_vec3(sticker.normal() * (CUBIE_SIZE / 2.0)));
}

/// Builds the scene node for one cubie: a black body plus its stickers.
///
/// Stickers are children of the cubie node, so setting the node's transform
/// moves them along.
fn build_cubie(scene: &mut SceneNode3d, cubie: &Cubie) -> SceneNode3d {
    let mut node = scene.add_group();
    node.add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
        .set_color(Color::new(0.05, 0.05, 0.05, 1.0));
    for sticker in &cubie.stickers {
        add_sticker(&mut node, sticker);
    }
    apply_transform(&mut node, cubie);
    node
}

fn apply_transform(node: &mut SceneNode3d, cubie: &Cubie) {
    node.set_position(to_kiss_vec3(cubie.transform.position));
    node.set_rotation(to_kiss_quat(cubie.transform.rotation));
}

/// Adds a gray handle for each affordance.
fn build_affordances(scene: &mut SceneNode3d, affordances: &[Affordance]) {
    let size = AFFORDANCE_HALF_SIZE * 2.0;
    for affordance in affordances {
        scene
            .add_cube(size, size, size)
            .set_color(Color::new(0.45, 0.45, 0.45, 1.0))
            .set_position(to_kiss_vec3(affordance.center));
    }
}

fn window_title(session: &Session) -> String {
    match session.pending() {
        0 => "cubeturn - [1-9] turn, [Alt] reverse, click handles".to_string(),
        pending => format!("cubeturn - {} moves queued", pending),
    }
}

/// Shows the session in an interactive 3D viewer until the window closes.
pub fn display(session: Session) {
    pollster::block_on(display_async(session));
}

async fn display_async(mut session: Session) {
    let mut title = window_title(&session);
    let mut window = Window::new(&title).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 4.0, 5.0));

    let mut cubie_nodes: Vec<SceneNode3d> = session
        .cubies()
        .iter()
        .map(|cubie| build_cubie(&mut scene, cubie))
        .collect();

    let affordances = input::affordances();
    build_affordances(&mut scene, &affordances);

    let started_at = Instant::now();
    let mut cursor = (0.0, 0.0);
    // cursor position when a mouse button went down
    let mut press_position = None;

    loop {
        for event in window.events().iter() {
            match event.value {
                WindowEvent::Key(key, Action::Press, modifiers) => {
                    let reverse = modifiers.contains(Modifiers::Alt);
                    if let Some(request) =
                        key_char(key).and_then(|c| input::request_for_key(c, reverse))
                    {
                        session.enqueue(request);
                    }
                }
                WindowEvent::CursorPos(x, y, _) => cursor = (x, y),
                WindowEvent::MouseButton(_, Action::Press, _) => press_position = Some(cursor),
                WindowEvent::MouseButton(button, Action::Release, _) => {
                    let Some((press_x, press_y)) = press_position.take() else {
                        continue;
                    };
                    let travel = (cursor.0 - press_x).hypot(cursor.1 - press_y);
                    if travel > CLICK_SLOP {
                        continue;
                    }
                    let Some(button) = pointer_button(button) else {
                        continue;
                    };

                    let size = window.size();
                    let (origin, direction) = camera.unproject(
                        Vec2::new(cursor.0 as f32, cursor.1 as f32),
                        Vec2::new(size.x as f32, size.y as f32),
                    );
                    let picked = input::pick(
                        &affordances,
                        glam::Vec3::from_array(origin.to_array()),
                        glam::Vec3::from_array(direction.to_array()),
                    );
                    if let Some(affordance) = picked {
                        session.enqueue(affordance.request(button));
                    }
                }
                _ => {}
            }
        }

        let tick = session.tick(started_at.elapsed());
        for &id in &tick.moved {
            apply_transform(&mut cubie_nodes[id], session.cubie(id));
        }

        let new_title = window_title(&session);
        if new_title != title {
            window.set_title(&new_title);
            title = new_title;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
