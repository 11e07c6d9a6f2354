use clap::Parser;
use ixspeed::app::IxSpeedApp;

fn main() {
    env_logger::init();
    let args = IxSpeedApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("ixspeed failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
