use clap::Parser;

mod args;
mod check;
mod debug;
mod new;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let args = args::Cli::parse();
    args.color.write_global();
    init_logging(&args);

    match &args.command {
        args::Command::Init(cmd) => cmd.run(),
        args::Command::Check(cmd) => cmd.run(),
        args::Command::Debug(cmd) => cmd.run(),
    }
}

fn init_logging(args: &args::Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(args.verbose.log_level_filter());
    builder.format(|f, record| {
        use std::io::Write as _;

        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{level:8} {}", record.args())
    });
    builder.init();
}
