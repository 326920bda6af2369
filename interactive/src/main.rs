use clap::Parser;

use winit::dpi::PhysicalSize;

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    let args = <Args as Parser>::parse();

    let app = match App::new(PhysicalSize::new(args.width, args.height)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Could not start the renderer: {e}");
            std::process::exit(-1);
        }
    };

    app.run();
}
