//! Full-screen sheet used by the preview and confirmation dialogs.
//!
//! Open/close is controlled externally through the `open` prop; the sheet
//! itself only toggles the `show` class so CSS can animate it.

use uuid::Uuid;
use yew::{Component, Context, Html, Properties, classes, html};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.props().open;
        html! {
            <div
                class={classes!("top-sheet", open.then_some("show"))}
                id={self.id.clone()}
                style={if open { "display:block;" } else { "display:none;" }}
            >
                { ctx.props().children.clone() }
            </div>
        }
    }
}
