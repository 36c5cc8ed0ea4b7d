fn main() {
    bcdc::app::cli::run();
}
