//! Confirmation dialog for the two-phase delete flow.

use yew::prelude::*;

use crate::top_sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub struct ConfirmDialog;

impl Component for ConfirmDialog {
    type Message = ();
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConfirmDialog
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
        let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

        html! {
            <TopSheet open={props.open}>
                <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                    <div style="background:#fff;border-radius:8px;padding:24px;max-width:420px;box-shadow:0 4px 24px rgba(0,0,0,0.3);">
                        <p style="margin:0 0 16px;">{ props.message.clone() }</p>
                        <div style="display:flex;gap:8px;justify-content:flex-end;">
                            <button class="btn" onclick={on_cancel}>{"Cancel"}</button>
                            <button class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
                        </div>
                    </div>
                </div>
            </TopSheet>
        }
    }
}
