fn main() {
    tracing_subscriber::fmt::init();

    let presenter_factory = fractal_ramp::PixelsPresenterFactory::new();
    let command = fractal_ramp::RunGuiCommand::new(presenter_factory);

    command.execute();
}
