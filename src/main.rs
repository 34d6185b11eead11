mod gallery_app;
mod input;
mod scroll_lock;
mod style;
mod viewport;

fn main() {
    gallery_app::run();
}
