//! Contact form: validation display, simulated send, success modal.

use super::{Page, dom};
use crate::config::{FormConfig, SiteConfig};
use crate::contract::{self, class};
use crate::form::{
    self, ContactForm, Field, FieldErrors, FormView, ModalState, SubmitFlow, SubmitOutcome,
};
use crate::markup;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    Node,
};

struct Modal {
    element: Element,
    state: ModalState,
}

impl Modal {
    fn render(&self) {
        dom::set_class(&self.element, class::SHOW, self.state.is_open());
    }
}

thread_local! {
    static MODAL: RefCell<Option<Modal>> = const { RefCell::new(None) };
}

fn with_modal(f: impl FnOnce(&mut Modal)) {
    MODAL.with_borrow_mut(|modal| match modal {
        Some(modal) => {
            f(modal);
            modal.render();
        }
        None => log::debug!("no success modal on this page"),
    });
}

pub(crate) fn close_modal() {
    with_modal(|modal| modal.state.close());
}

pub(crate) fn mount(page: &Page, config: &Rc<SiteConfig>) {
    mount_modal(page);
    let Some(form) = dom::query(&page.document, contract::CONTACT_FORM)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let flow = Rc::new(RefCell::new(SubmitFlow::default()));
    let document = page.document.clone();
    let config = Rc::clone(config);
    let target = form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let values = read_form(&document);
            let scope: &Element = form.as_ref();
            let button = dom::query(scope, contract::SUBMIT_BUTTON)
                .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());
            let label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();

            let outcome = flow.borrow_mut().submit(&values, &label, &config.form);
            match outcome {
                SubmitOutcome::Busy => log::debug!("send already in flight"),
                SubmitOutcome::Rejected(errors) => {
                    render_errors(&document, &FormView::from_errors(&errors), &config.form);
                }
                SubmitOutcome::Sending { delay } => {
                    let clean = FormView::from_errors(&FieldErrors::new());
                    render_errors(&document, &clean, &config.form);
                    if let Some(button) = &button {
                        button.set_inner_html(&markup::sending_label(&config.form.sending_label));
                        button.set_disabled(true);
                    }
                    let flow = Rc::clone(&flow);
                    let form = form.clone();
                    let document = document.clone();
                    let idle = config.form.idle_border_color.clone();
                    Timeout::new(dom::millis(delay), move || {
                        form.reset();
                        let restored = flow.borrow_mut().finish();
                        if let Some(button) = &button {
                            if let Some(label) = restored {
                                button.set_inner_html(&label);
                            }
                            button.set_disabled(false);
                        }
                        with_modal(|modal| modal.state.open());
                        for field in dom::query_all(&document, contract::FORM_FIELDS) {
                            dom::set_style(&field, "border-color", &idle);
                        }
                    })
                    .forget();
                }
            }
        },
    )
    .forget();
}

fn mount_modal(page: &Page) {
    let Some(element) = dom::query(&page.document, contract::SUCCESS_MODAL) else {
        return;
    };

    let overlay = element.clone();
    EventListener::new(&element, "click", move |event| {
        let on_overlay = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|target| overlay.is_same_node(Some(&target)));
        with_modal(|modal| {
            modal.state.click(on_overlay);
        });
    })
    .forget();

    if let Some(close) = dom::query(&element, contract::MODAL_CLOSE) {
        EventListener::new(&close, "click", |_| close_modal()).forget();
    }

    MODAL.with_borrow_mut(|modal| {
        *modal = Some(Modal {
            element,
            state: ModalState::default(),
        });
    });
}

fn read_form(document: &Document) -> ContactForm {
    let value = |field: Field| -> String {
        let Some(element) = document.get_element_by_id(field.id()) else {
            log::debug!("form field #{} missing", field.id());
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    };
    ContactForm {
        name: value(Field::Name),
        email: value(Field::Email),
        subject: value(Field::Subject),
        message: value(Field::Message),
    }
}

/// Replace every error message with the ones `view` calls for.
fn render_errors(document: &Document, view: &FormView, config: &FormConfig) {
    for stale in dom::query_all(document, contract::ERROR_MESSAGE) {
        stale.remove();
    }
    for (field, message) in view.failed() {
        let Some(input) = document.get_element_by_id(field.id()) else {
            continue;
        };
        let Ok(note) = document.create_element("div") else {
            continue;
        };
        note.set_class_name(class::ERROR_MESSAGE);
        for (property, value) in form::error_message_style(config) {
            dom::set_style(&note, property, &value);
        }
        note.set_text_content(Some(message));
        if let Err(err) = input.after_with_node_1(&note) {
            log::warn!("could not place error for #{}: {err:?}", field.id());
            continue;
        }
        dom::set_style(&input, "border-color", &config.error_color);

        let focused = input.clone();
        let focus_color = config.focus_color.clone();
        EventListener::once(&input, "focus", move |_| {
            dom::set_style(&focused, "border-color", &focus_color);
            note.remove();
        })
        .forget();
    }
}
