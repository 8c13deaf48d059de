use anyhow::Result;
use log::{error, info};
use tiny_skia::Color;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::CursorIcon,
};

use resizer::config::load_options;
use resizer::renderer::{Panel, Renderer};
use resizer::resizer::{Handle, HandleRegion, Side};
use resizer::window_manager::WindowState;
use resizer::{Page, Point, Rect};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

fn cursor_for(region: Option<HandleRegion>) -> CursorIcon {
    match region {
        Some(HandleRegion {
            handle: Handle::Edge(Side::Right),
            ..
        }) => CursorIcon::EwResize,
        Some(HandleRegion {
            handle: Handle::Edge(Side::Bottom),
            ..
        }) => CursorIcon::NsResize,
        Some(HandleRegion {
            handle: Handle::Corner,
            ..
        }) => CursorIcon::NeswResize,
        Some(HandleRegion {
            handle: Handle::Drag,
            wired: true,
            ..
        }) => CursorIcon::Move,
        _ => CursorIcon::Default,
    }
}

fn redraw(state: &mut WindowState, renderer: &mut Renderer, page: &Page) -> Result<()> {
    let (width, height) = state.fit_surface()?;
    renderer.resize(width, height)?;
    renderer.paint_page(page)?;
    state.present(&renderer.as_bgra_u32())
}

#[allow(deprecated)]
fn main() -> Result<()> {
    env_logger::init();
    // 未知的边（RESIZER_EDGES）在此直接报错退出
    let options = load_options()?;
    info!("starting resizer demo with {options:?}");

    let mut page = Page::new();
    page.mount(
        options,
        Rect::new(40.0, 40.0, 200.0, 100.0),
        Box::new(Panel {
            color: Color::from_rgba8(230, 236, 240, 255),
            padding: 16.0,
        }),
    );

    let event_loop = EventLoop::new()?;
    let mut window: Option<WindowState> = None;
    let mut renderer = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut cursor = Point::default();

    event_loop.run(|event, elwt| match event {
        Event::Resumed => {
            if window.is_none() {
                match WindowState::new(elwt, "Resizer", WINDOW_WIDTH, WINDOW_HEIGHT) {
                    Ok(state) => {
                        state.window.request_redraw();
                        window = Some(state);
                    }
                    Err(e) => {
                        error!("window create failed: {e}");
                        elwt.exit();
                    }
                }
            }
        }
        Event::WindowEvent { event, .. } => {
            let Some(state) = window.as_mut() else {
                return;
            };
            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(e) = redraw(state, &mut renderer, &page) {
                        error!("redraw failed: {e}");
                    }
                }
                WindowEvent::Resized(_) => state.window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(position.x, position.y);
                    // 文档级监听：指针离开控件后拖动仍然继续
                    page.pointer_move(cursor);
                    if page.document().listener_count() == 0 {
                        state.window.set_cursor(cursor_for(page.cursor_at(cursor)));
                    }
                    state.window.request_redraw();
                }
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => {
                    match button_state {
                        ElementState::Pressed => {
                            page.pointer_down(cursor);
                        }
                        ElementState::Released => page.pointer_up(),
                    }
                    state.window.request_redraw();
                }
                WindowEvent::Focused(false) => {
                    // 窗口级兜底：失焦时可能收不到 pointer-up
                    page.cancel_interactions();
                    state.window.request_redraw();
                }
                _ => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
