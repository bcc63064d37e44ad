//! Site selection control fed by the read-only site registry.

use common::model::site::Site;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SiteSelectProps {
    pub sites: Vec<Site>,
    #[prop_or_default]
    pub selected: Option<String>,
    /// Label of the empty option: "All sites" for filters, "Choose a
    /// site…" for editors.
    pub empty_label: AttrValue,
    pub on_change: Callback<Option<String>>,
}

pub struct SiteSelect;

impl Component for SiteSelect {
    type Message = ();
    type Properties = SiteSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SiteSelect
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = {
            let cb = props.on_change.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let value = select.value();
                cb.emit(if value.is_empty() { None } else { Some(value) });
            })
        };

        html! {
            <select class="site-select" {onchange}>
                <option value="" selected={props.selected.is_none()}>
                    { props.empty_label.clone() }
                </option>
                {
                    for props.sites.iter().map(|site| {
                        let selected = props.selected.as_deref() == Some(site.id.as_str());
                        html! {
                            <option value={site.id.clone()} {selected}>{ site.name.clone() }</option>
                        }
                    })
                }
            </select>
        }
    }
}
