//! Mail preview dialog.
//!
//! Read-only render of a [`MailPreviewData`] projection, simulating the
//! mail across desktop/tablet/mobile widths. Open/close is owned by the
//! caller through `open` / `on_open_change`; the only internal state is
//! the selected device tab.

use common::preview::{MailPreviewData, PreviewDevice};
use yew::prelude::*;

use crate::top_sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct MailPreviewProps {
    pub open: bool,
    pub data: MailPreviewData,
    pub on_open_change: Callback<bool>,
}

pub enum Msg {
    SetDevice(PreviewDevice),
}

pub struct MailPreview {
    device: PreviewDevice,
}

impl Component for MailPreview {
    type Message = Msg;
    type Properties = MailPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            device: PreviewDevice::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetDevice(device) => {
                self.device = device;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let data = &props.data;
        let close = props.on_open_change.reform(|_: MouseEvent| false);
        let width = self.device.width_px();

        html! {
            <TopSheet open={props.open}>
                <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                    <button
                        onclick={close}
                        style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <div class="tab-bar" style="margin-bottom:12px;">
                        {
                            for PreviewDevice::ALL.iter().map(|device| {
                                let device = *device;
                                html! {
                                    <button
                                        class={classes!("tab-btn", (self.device == device).then_some("active"))}
                                        onclick={link.callback(move |_| Msg::SetDevice(device))}
                                    >
                                        { device.label() }
                                    </button>
                                }
                            })
                        }
                    </div>
                    <div
                        class="mail-preview"
                        style={format!("width:{width}px;max-height:80vh;overflow-y:auto;background:#fff;border-radius:6px;padding:16px;font-family:Arial, sans-serif;")}
                    >
                        <div style="color:#888;font-size:12px;">{ data.texte_apercu.clone() }</div>
                        <div style="font-weight:bold;margin:4px 0;">{ data.sujet.clone() }</div>
                        {
                            if data.image_url.is_empty() {
                                html! {}
                            } else if data.banner_href.is_empty() {
                                html! { <img src={data.image_url.clone()} style="width:100%;border-radius:4px;" /> }
                            } else {
                                html! {
                                    <a href={data.banner_href.clone()}>
                                        <img src={data.image_url.clone()} style="width:100%;border-radius:4px;" />
                                    </a>
                                }
                            }
                        }
                        <h2 style="margin:12px 0 8px;">{ data.titre_mail.clone() }</h2>
                        <p style="white-space:pre-wrap;">{ data.contenu_haut.clone() }</p>
                        {
                            if data.texte_button.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <p style="text-align:center;margin:16px 0;">
                                        <a
                                            href={data.button_href.clone()}
                                            style="background:#1976d2;color:#fff;padding:10px 24px;border-radius:4px;text-decoration:none;display:inline-block;"
                                        >
                                            { data.texte_button.clone() }
                                        </a>
                                    </p>
                                }
                            }
                        }
                        <p style="white-space:pre-wrap;">{ data.contenu_bas.clone() }</p>
                    </div>
                </div>
            </TopSheet>
        }
    }
}
