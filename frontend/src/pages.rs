use std::rc::Rc;

use gloo_net::http::Method;
use gloo_timers::callback::Timeout;
use log::error;
use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_empty, fetch_json, ApiError};
use crate::config::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::listing::{cell_text, paginate, row_id, search, without_row};
use crate::resources::Resource;
use crate::session::use_session;

#[derive(Clone, PartialEq)]
enum Load {
    Loading,
    Ready(Rc<Vec<Value>>),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ResourcePageProps {
    pub resource: &'static Resource,
}

/* -------------------------------------------------------------------------- */
/*                          full list, filtered locally                       */
/* -------------------------------------------------------------------------- */

#[function_component(ResourcePage)]
pub fn resource_page(props: &ResourcePageProps) -> Html {
    let resource = props.resource;
    let session = use_session();

    let load = use_state(|| Load::Loading);
    let query = use_state(String::new);
    let page = use_state(|| 1usize);
    let debounce = use_mut_ref(|| None::<Timeout>);

    /* ------------ fetch once per resource ------------------------------ */
    {
        let session = session.clone();
        let load = load.clone();
        let page = page.clone();
        use_effect_with(resource, move |resource| {
            let resource: &'static Resource = *resource;
            load.set(Load::Loading);
            page.set(1);
            spawn_local(async move {
                match fetch_json::<(), Vec<Value>>(&session, Method::GET, resource.endpoint, None).await {
                    Ok(rows) => load.set(Load::Ready(Rc::new(rows))),
                    Err(e) => {
                        error!("GET {} failed: {e}", resource.endpoint);
                        let msg = match e {
                            ApiError::Unauthorized => "Sesi tidak valid, silakan masuk kembali.".to_string(),
                            other => format!("Gagal memuat {}: {other}", resource.title),
                        };
                        gloo_dialogs::alert(&msg);
                        load.set(Load::Failed(msg));
                    }
                }
            });
            || ()
        });
    }

    /* ------------ debounced search ------------------------------------- */
    let oninput = {
        let query = query.clone();
        let page = page.clone();
        let debounce = debounce.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let query = query.clone();
            let page = page.clone();
            // dropping the previous timeout cancels it
            *debounce.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                query.set(value);
                page.set(1);
            }));
        })
    };

    let go_to = |target: usize| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    /* ------------ delete one row ---------------------------------------- */
    let on_delete = |rows: Rc<Vec<Value>>, id: String| {
        let session = session.clone();
        let load = load.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo_dialogs::confirm("Hapus data ini?") {
                return;
            }
            let session = session.clone();
            let load = load.clone();
            let rows = rows.clone();
            let id = id.clone();
            let path = format!("{}/{id}", resource.endpoint);
            spawn_local(async move {
                match fetch_empty::<()>(&session, Method::DELETE, &path, None).await {
                    Ok(()) => load.set(Load::Ready(Rc::new(without_row(&rows, &id)))),
                    Err(e) => {
                        error!("DELETE {path} failed: {e}");
                        gloo_dialogs::alert(&format!("Gagal menghapus data: {e}"));
                    }
                }
            });
        })
    };

    let body = match &*load {
        Load::Loading => html!(<p>{ "Memuat…" }</p>),
        Load::Failed(msg) => html!(<p class="error">{ msg.clone() }</p>),
        Load::Ready(rows) => {
            let hits = search(rows.as_slice(), resource.columns, &query);
            let current = paginate(&hits, *page, PAGE_SIZE);

            html! {
                <>
                    <table class="resource-table">
                        <thead>
                            <tr>
                                { for resource.columns.iter().map(|c| html!(<th>{ c.title }</th>)) }
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for current.items.iter().map(|row| html! {
                                <tr>
                                    { for resource.columns.iter().map(|c| html!(<td>{ cell_text(row, c.key) }</td>)) }
                                    <td>
                                        if let Some(id) = row_id(row) {
                                            <button class="delete" onclick={on_delete(rows.clone(), id)}>{ "Hapus" }</button>
                                        }
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>

                    <div class="pager">
                        <button disabled={current.number <= 1} onclick={go_to(current.number.saturating_sub(1))}>{ "‹" }</button>
                        <span>{ format!("Halaman {} dari {} ({} data)", current.number, current.total_pages, hits.len()) }</span>
                        <button disabled={current.number >= current.total_pages} onclick={go_to(current.number + 1)}>{ "›" }</button>
                    </div>
                </>
            }
        }
    };

    html! {
        <section class="resource-page">
            <h2>{ resource.title }</h2>
            <input type="search" placeholder="Cari…" {oninput} />
            { body }
        </section>
    }
}
