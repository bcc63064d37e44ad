//! Scenario create/edit form: root module wiring the Yew `Component`
//! implementation with submodules for props, messages, state, update
//! logic, view rendering and helpers.
//!
//! The component owns a `ScenarioDraft` from `common` and publishes its
//! dirty state to the window-level `app_dirty` flag so unsaved edits
//! survive an accidental navigation prompt.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ScenarioEditorProps;
pub use state::ScenarioEditor;

use crate::dirty::set_dirty;

impl Component for ScenarioEditor {
    type Message = Msg;
    type Properties = ScenarioEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        ScenarioEditor::from_props(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // A different entity (or mode) was loaded into the form: restart
        // from a clean draft.
        if ctx.props().scenario != old_props.scenario || ctx.props().kind != old_props.kind {
            *self = ScenarioEditor::from_props(ctx.props());
            set_dirty(false);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_dirty(false);
    }
}
