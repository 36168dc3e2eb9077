use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

mod cli;
mod headless;
mod startup;
mod web_params;

use cli::{CliArgs, USAGE};

fn main() {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return;
    }

    if args.headless {
        headless::run_headless(&args);
        return;
    }

    run_windowed(args);
}

fn run_windowed(args: CliArgs) {
    #[cfg(target_arch = "wasm32")]
    let (args, query_error) = {
        let mut args = args;
        let error = web_params::apply_query_params(&mut args).err();
        (args, error)
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Feels Like".to_string(),
            resolution: (960.0, 600.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // The calculator only redraws on input.
    .insert_resource(WinitSettings::desktop_app())
    .insert_resource(ClearColor(Color::srgb(0.11, 0.10, 0.12)));

    #[cfg(target_arch = "wasm32")]
    if let Some(e) = query_error {
        warn!("Ignoring URL parameters: {e}");
    }

    // After DefaultPlugins so config loading is logged.
    startup::insert_calculator_resources(&mut app, &args);

    app.add_systems(Startup, spawn_camera)
        .add_plugins(ui::UiPlugin)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
