use crate::markup::activity_card_html;
use crate::model::{CatalogEntry, DeleteTarget, DELETE_CONTROL_SELECTOR};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivityCardProps {
    pub entry: CatalogEntry,
    pub on_delete: Callback<DeleteTarget>,
}

/// Finds the delete control at or above `target` and reads the participant
/// it belongs to. Clicks anywhere else on the card resolve to `None`.
pub fn resolve_delete_target(target: &Element) -> Option<DeleteTarget> {
    let control = target.closest(DELETE_CONTROL_SELECTOR).ok().flatten()?;
    DeleteTarget::from_data(
        control.get_attribute("data-email"),
        control.get_attribute("data-activity"),
    )
}

/// One activity. A single click listener on the card handles every delete
/// control inside it.
#[function_component(ActivityCardComp)]
pub fn activity_card_comp(props: &ActivityCardProps) -> Html {
    let markup = activity_card_html(&props.entry);

    let onclick = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event.target_dyn_into::<Element>() else {
                return;
            };
            if let Some(delete_target) = resolve_delete_target(&target) {
                on_delete.emit(delete_target);
            }
        })
    };

    html! {
        <div class="activity-card" {onclick}>
            {Html::from_html_unchecked(AttrValue::from(markup))}
        </div>
    }
}
