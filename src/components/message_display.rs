use crate::model::MessageSlot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageDisplayProps {
    pub slot: MessageSlot,
}

/// The status line. Keeps the last text while hidden.
#[function_component(MessageDisplayComp)]
pub fn message_display_comp(props: &MessageDisplayProps) -> Html {
    let (text, kind_class) = props
        .slot
        .message()
        .map(|message| (message.text.clone(), Some(message.kind.css_class())))
        .unwrap_or_default();
    let hidden = (!props.slot.is_visible()).then_some("hidden");

    html! {
        <div id="message" class={classes!(kind_class, hidden)}>
            {text}
        </div>
    }
}
