use crate::app::App;

mod app;
mod components;
mod demo;
mod dirty;
mod toast;
mod top_sheet;

fn main() {
    dirty::install_unload_guard();
    yew::Renderer::<App>::new().render();
}
