use crate::components::{
    ActivitiesListComp, MessageDisplayComp, MessageTimer, SignupFields, SignupFormComp,
};
use crate::config::MESSAGE_TIMEOUT;
use crate::handler::{ActivitiesBackend, ActivitiesController, BoardView, CatalogState};
use crate::markup::select_options;
use crate::model::{ActivityCatalog, DeleteTarget, Message};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivitiesBoardProps<B>
where
    B: ActivitiesBackend + Clone + PartialEq + 'static,
{
    pub backend: B,
    #[prop_or(MESSAGE_TIMEOUT)]
    pub message_timeout: Duration,
}

/// Handles into the board's state, handed to the controller as its view.
#[derive(Clone)]
struct BoardHandle {
    catalog: UseStateHandle<CatalogState>,
    fields: UseStateHandle<SignupFields>,
    messages: Rc<MessageTimer>,
    redraw: UseForceUpdateHandle,
}

impl BoardView for BoardHandle {
    fn render(&self, state: CatalogState) {
        self.catalog.set(state);
    }

    fn show_message(&self, message: Message) {
        let redraw = self.redraw.clone();
        self.messages.show(message, move || redraw.force_update());
        self.redraw.force_update();
    }

    fn clear_form(&self) {
        self.fields.set(SignupFields::default());
    }
}

/// The activities list, the signup form and the message display, wired to a
/// backend.
#[function_component(ActivitiesBoard)]
pub fn activities_board<B>(props: &ActivitiesBoardProps<B>) -> Html
where
    B: ActivitiesBackend + Clone + PartialEq + 'static,
{
    let controller = use_memo(props.backend.clone(), |backend| {
        ActivitiesController::new(backend.clone())
    });

    let catalog = use_state(CatalogState::default);
    let fields = use_state(SignupFields::default);
    let messages = use_memo(props.message_timeout, |timeout| MessageTimer::new(*timeout));
    let redraw = use_force_update();

    let view = BoardHandle {
        catalog: catalog.clone(),
        fields: fields.clone(),
        messages: messages.clone(),
        redraw,
    };

    {
        let controller = controller.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            log::info!("Loading activities");
            spawn_local(async move {
                controller.refresh(&view).await;
            });
            || ()
        });
    }

    let on_change = {
        let fields = fields.clone();
        Callback::from(move |updated: SignupFields| fields.set(updated))
    };

    let on_submit = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |submitted: SignupFields| {
            let controller = controller.clone();
            let view = view.clone();
            spawn_local(async move {
                controller
                    .signup(&submitted.activity, &submitted.email, &view)
                    .await;
            });
        })
    };

    let on_delete = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |target: DeleteTarget| {
            let controller = controller.clone();
            let view = view.clone();
            spawn_local(async move {
                controller.unregister(&target, &view).await;
            });
        })
    };

    let options = match &*catalog {
        CatalogState::Loaded(catalog) => select_options(catalog),
        _ => select_options(&ActivityCatalog::new()),
    };
    let slot = messages.slot();

    html! {
        <main class="activities-board">
            <section id="activities-container">
                <h3>{"Available Activities"}</h3>
                <ActivitiesListComp state={(*catalog).clone()} {on_delete} />
            </section>
            <section id="signup-container">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupFormComp
                    {options}
                    fields={(*fields).clone()}
                    {on_change}
                    {on_submit}
                />
                <MessageDisplayComp {slot} />
            </section>
        </main>
    }
}
