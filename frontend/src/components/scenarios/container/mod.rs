//! Scenario list/detail/stats container: root module wiring the Yew
//! `Component` implementation with submodules for props, messages, state,
//! update logic and view rendering.
//!
//! The container owns the authoritative scenario collection for one
//! scenario kind and routes between the list, creation, detail and
//! statistics tabs.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ScenariosProps;
pub use state::{ContainerTab, ScenariosContainer};

impl Component for ScenariosContainer {
    type Message = Msg;
    type Properties = ScenariosProps;

    fn create(ctx: &Context<Self>) -> Self {
        ScenariosContainer::new(ctx.props().kind)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
