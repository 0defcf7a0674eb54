use std::{path::PathBuf, sync::OnceLock};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use fia::{
    config::Config,
    game::{Color, Game, TileKind, layout::BOARD_SIZE},
    screen::Screen,
};
use nannou::{
    App,
    color::{self, Rgb},
    event::{Key, Update},
    frame::Frame,
    geom::Rect,
};
use tracing_subscriber::EnvFilter;

/// Handed from `main` to the nannou model constructor.
static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Parser)]
#[command(name = "fia")]
#[command(about = "Four-player Fia board game", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, takes precedence over RUST_LOG (e.g. "debug" or "fia=trace")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration, then print the effective settings
    CheckConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(filter) => EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{}'", filter))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("could not load {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(Commands::CheckConfig) = cli.command {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    CONFIG.set(config).map_err(|_| anyhow!("configuration was already set"))?;
    nannou::app(model).update(update).run();
    Ok(())
}

struct Model {
    screen: Screen,
    config: Config,
    /// Grey level of the blinking selection marker.
    blink: u8,
}

fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();

    let window = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .key_pressed(key_pressed)
        .view(view)
        .build();
    if let Err(err) = window {
        tracing::error!(?err, "could not create the window");
        std::process::exit(1);
    }

    Model {
        screen: Screen::MainMenu,
        config,
        blink: u8::MAX,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.screen.tick();
    model.blink = model.blink.checked_sub(1).unwrap_or(u8::MAX);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let Some(name) = key_name(key) else {
        return;
    };
    let Some(action) = model.config.keys.action(name) else {
        tracing::trace!(key = name, "key is not bound");
        return;
    };
    let event = model.screen.handle(action, model.config.game);
    tracing::debug!(?action, ?event, "handled input");
}

fn key_name(key: Key) -> Option<&'static str> {
    let name = match key {
        Key::Space => "space",
        Key::Return => "return",
        Key::Escape => "escape",
        Key::Tab => "tab",
        Key::Back => "backspace",
        Key::Left => "left",
        Key::Right => "right",
        Key::Up => "up",
        Key::Down => "down",
        Key::Key0 => "0",
        Key::Key1 => "1",
        Key::Key2 => "2",
        Key::Key3 => "3",
        Key::Key4 => "4",
        Key::Key5 => "5",
        Key::Key6 => "6",
        Key::Key7 => "7",
        Key::Key8 => "8",
        Key::Key9 => "9",
        Key::A => "a",
        Key::B => "b",
        Key::C => "c",
        Key::D => "d",
        Key::E => "e",
        Key::F => "f",
        Key::G => "g",
        Key::H => "h",
        Key::I => "i",
        Key::J => "j",
        Key::K => "k",
        Key::L => "l",
        Key::M => "m",
        Key::N => "n",
        Key::O => "o",
        Key::P => "p",
        Key::Q => "q",
        Key::R => "r",
        Key::S => "s",
        Key::T => "t",
        Key::U => "u",
        Key::V => "v",
        Key::W => "w",
        Key::X => "x",
        Key::Y => "y",
        Key::Z => "z",
        _ => return None,
    };
    Some(name)
}

fn rgb(color: Color) -> Rgb {
    color::rgb(color.r as f32 / 255.0, color.g as f32 / 255.0, color.b as f32 / 255.0)
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(Color::BACKGROUND));

    let window_rect = app.window_rect();

    match model.screen.game() {
        None => {
            draw.text("Fia")
                .x_y(0.0, window_rect.h() / 8.0)
                .w(window_rect.w())
                .font_size(64)
                .color(color::BLACK);
            draw.text("Press Enter to start")
                .x_y(0.0, -window_rect.h() / 8.0)
                .w(window_rect.w())
                .font_size(24)
                .color(color::BLACK);
        }
        Some(game) => draw_game(&draw, window_rect, game, model.blink),
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!(?err, "failed to draw frame");
    }
}

fn draw_game(draw: &nannou::Draw, window_rect: Rect, game: &Game, blink: u8) {
    // Board keeps the proportions of a 400px board in a 480px high window.
    let side = window_rect.w().min(window_rect.h()) * BOARD_SIZE / 480.0;
    let scale = side / BOARD_SIZE;
    let board_rect = Rect::from_w_h(side, side);
    let to_screen = |x: f32, y: f32| (board_rect.left() + x * scale, board_rect.top() - y * scale);

    for tile in game.tile_views() {
        let (x, y) = to_screen(tile.x + tile.size / 2.0, tile.y + tile.size / 2.0);
        let size = tile.size * scale;
        let rect = draw.rect().x_y(x, y).w_h(size, size).color(rgb(tile.color));
        if tile.kind == TileKind::Finish && tile.occupants.len() > 1 {
            rect.stroke(color::BLACK).stroke_weight(2.0);
        }
    }

    for token in game.token_views() {
        let (x, y) = to_screen(token.x, token.y);
        let radius = 12.0 * scale;
        let outline = if token.movable { color::WHITE } else { color::BLACK };
        draw.ellipse()
            .x_y(x, y)
            .radius(radius)
            .color(rgb(token.color))
            .stroke(outline)
            .stroke_weight(2.0);

        if token.selected {
            let grey = blink as f32 / 255.0;
            draw.rect()
                .x_y(x, y + radius + 6.0 * scale)
                .w_h(10.0 * scale, 10.0 * scale)
                .color(color::rgb(grey, grey, grey));
        }
    }

    let hud = game.hud();
    draw.text(&hud.message)
        .left_justify()
        .x_y(0.0, window_rect.top() - 20.0)
        .w(window_rect.w() - 20.0)
        .font_size(18)
        .color(color::BLACK);

    if let Some(face) = hud.die_face {
        let size = 46.0 * scale;
        let (x, y) = (window_rect.left() + 30.0 + size / 2.0, window_rect.top() - 60.0 - size / 2.0);
        draw.rect()
            .x_y(x, y)
            .w_h(size, size)
            .color(color::WHITE)
            .stroke(color::BLACK)
            .stroke_weight(2.0);
        draw.text(&face.to_string())
            .x_y(x, y)
            .font_size((size / 2.0) as u32)
            .color(if hud.rolling.is_some() { color::GRAY } else { color::BLACK });
    }
}
