use activities_board::prelude::*;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::default());
    let backend = HttpBackend::new(&config);

    html! {
        <ActivitiesBoard<HttpBackend>
            {backend}
            message_timeout={config.message_timeout}
        />
    }
}
