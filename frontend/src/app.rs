//! Application root: top-level navigation between the three back-office
//! sections (cart recovery, birthday mails, newsletters).

use common::model::scenario::ScenarioKind;
use yew::{Component, Context, Html, classes, html};

use crate::components::newsletters::NewslettersContainer;
use crate::components::scenarios::ScenariosContainer;
use crate::demo;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    CartRecovery,
    Birthday,
    Newsletters,
}

impl Section {
    const ALL: [Section; 3] = [
        Section::CartRecovery,
        Section::Birthday,
        Section::Newsletters,
    ];

    fn label(self) -> &'static str {
        match self {
            Section::CartRecovery => "Cart recovery",
            Section::Birthday => "Birthday emails",
            Section::Newsletters => "Newsletters",
        }
    }
}

pub struct App {
    section: Section,
}

pub enum Msg {
    SetSection(Section),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            section: Section::CartRecovery,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSection(section) => {
                self.section = section;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let sites = demo::sites();
        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{"Marketing automation"}</h1>
                    <nav class="tab-bar">
                        {
                            for Section::ALL.iter().map(|section| {
                                let section = *section;
                                html! {
                                    <button
                                        class={classes!("tab-btn", (self.section == section).then_some("active"))}
                                        onclick={link.callback(move |_| Msg::SetSection(section))}
                                    >
                                        { section.label() }
                                    </button>
                                }
                            })
                        }
                    </nav>
                </header>
                {
                    match self.section {
                        Section::CartRecovery => html! {
                            <ScenariosContainer kind={ScenarioKind::CartRecovery} sites={sites} />
                        },
                        Section::Birthday => html! {
                            <ScenariosContainer kind={ScenarioKind::Birthday} sites={sites} />
                        },
                        Section::Newsletters => html! {
                            <NewslettersContainer sites={sites} />
                        },
                    }
                }
            </div>
        }
    }
}
