fn main() {
    lagprep::app::cli::run();
}
