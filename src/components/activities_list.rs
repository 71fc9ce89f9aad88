use crate::components::ActivityCardComp;
use crate::handler::CatalogState;
use crate::markup::{LOADING_TEXT, LOAD_FAILED_TEXT};
use crate::model::DeleteTarget;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivitiesListProps {
    pub state: CatalogState,
    pub on_delete: Callback<DeleteTarget>,
}

#[function_component(ActivitiesListComp)]
pub fn activities_list_comp(props: &ActivitiesListProps) -> Html {
    html! {
        <div id="activities-list">
            {match &props.state {
                CatalogState::Loading => html! { <p>{LOADING_TEXT}</p> },
                CatalogState::Failed => html! { <p>{LOAD_FAILED_TEXT}</p> },
                CatalogState::Loaded(catalog) => html! {
                    {for catalog.get_activities().iter().map(|entry| {
                        html! {
                            <ActivityCardComp
                                entry={entry.clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        }
                    })}
                },
            }}
        </div>
    }
}
