use crate::config::{Config, ThemeConfig};
use crate::keymap::{action_for_key, button_action, Key};
use crate::reducer::Action;
use crate::store::CalculatorStore;
use gtk::gdk;
use gtk::glib;
use gtk::prelude::*;
use gtk::{Application, Box as GtkBox, Button, EventControllerKey, Grid, Label, Window};
use std::cell::RefCell;
use std::rc::Rc;

/// Keypad layout: label, column, row, column span.
const KEYPAD: [(&str, i32, i32, i32); 18] = [
    ("AC", 0, 0, 2),
    ("DEL", 2, 0, 1),
    ("÷", 3, 0, 1),
    ("1", 0, 1, 1),
    ("2", 1, 1, 1),
    ("3", 2, 1, 1),
    ("*", 3, 1, 1),
    ("4", 0, 2, 1),
    ("5", 1, 2, 1),
    ("6", 2, 2, 1),
    ("+", 3, 2, 1),
    ("7", 0, 3, 1),
    ("8", 1, 3, 1),
    ("9", 2, 3, 1),
    ("-", 3, 3, 1),
    (".", 0, 4, 1),
    ("0", 1, 4, 1),
    ("=", 2, 4, 2),
];

#[derive(Clone)]
struct OutputLabels {
    previous: Label,
    current: Label,
}

impl OutputLabels {
    fn render(&self, store: &CalculatorStore) {
        let text = store.display();
        self.previous.set_text(&text.previous);
        self.current.set_text(&text.current);
    }
}

pub fn build_ui(app: &Application, config: Config) {
    let store = Rc::new(RefCell::new(CalculatorStore::new()));

    let window = Window::builder()
        .application(app)
        .title(config.window.title.as_str())
        .default_width(config.window.width)
        .default_height(config.window.height)
        .decorated(config.window.decorated)
        .resizable(false)
        .build();

    let main_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(1)
        .build();
    main_box.add_css_class("calculator");

    // Output panel: previous operand + operation above the current operand
    let output = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .build();
    output.add_css_class("output");

    let previous = Label::new(None);
    previous.add_css_class("previous-operand");
    previous.set_xalign(1.0);
    previous.set_selectable(true);

    let current = Label::new(None);
    current.add_css_class("current-operand");
    current.set_xalign(1.0);
    current.set_wrap(true);
    current.set_wrap_mode(gtk::pango::WrapMode::Char);
    current.set_selectable(true);

    output.append(&previous);
    output.append(&current);
    main_box.append(&output);

    let display = OutputLabels { previous, current };

    let grid = Grid::builder()
        .row_homogeneous(true)
        .column_homogeneous(true)
        .row_spacing(1)
        .column_spacing(1)
        .vexpand(true)
        .build();
    grid.add_css_class("keypad");

    for (label, column, row, span) in KEYPAD {
        let Some(action) = button_action(label) else {
            continue;
        };

        let button = Button::builder()
            .label(label)
            .focusable(false)
            .hexpand(true)
            .vexpand(true)
            .build();
        if matches!(action, Action::ChooseOperation(_)) {
            button.add_css_class("operator");
        }

        let store_clone = store.clone();
        let display_clone = display.clone();
        button.connect_clicked(move |_| {
            let mut store = store_clone.borrow_mut();
            store.dispatch(action);
            display_clone.render(&store);
        });

        grid.attach(&button, column, row, span, 1);
    }
    main_box.append(&grid);

    apply_css(&config.theme);

    // Keyboard input mirrors the keypad; Ctrl+C copies the current operand
    let key_controller = EventControllerKey::new();
    key_controller.set_propagation_phase(gtk::PropagationPhase::Capture);
    let store_clone = store.clone();
    let display_clone = display.clone();
    let window_clone = window.clone();
    key_controller.connect_key_pressed(move |_, keyval, _, modifiers| {
        if modifiers.contains(gdk::ModifierType::CONTROL_MASK) {
            if matches!(keyval, gdk::Key::c | gdk::Key::C) {
                copy_current_operand(&window_clone, &store_clone.borrow());
                return glib::Propagation::Stop;
            }
            return glib::Propagation::Proceed;
        }

        let Some(action) = translate_key(keyval).and_then(action_for_key) else {
            return glib::Propagation::Proceed;
        };

        let mut store = store_clone.borrow_mut();
        store.dispatch(action);
        display_clone.render(&store);
        glib::Propagation::Stop
    });
    window.add_controller(key_controller);

    display.render(&store.borrow());
    window.set_child(Some(&main_box));
    window.present();
    tracing::info!("calculator window presented");
}

fn translate_key(keyval: gdk::Key) -> Option<Key> {
    match keyval {
        gdk::Key::Return | gdk::Key::KP_Enter => Some(Key::Enter),
        gdk::Key::BackSpace => Some(Key::Backspace),
        gdk::Key::Delete | gdk::Key::KP_Delete => Some(Key::Delete),
        gdk::Key::Escape => Some(Key::Escape),
        _ => keyval.to_unicode().map(Key::Char),
    }
}

fn copy_current_operand(window: &Window, store: &CalculatorStore) {
    match store.current_value() {
        Some(value) => {
            window.clipboard().set_text(value);
            tracing::debug!(value, "copied current operand to clipboard");
        }
        None => tracing::debug!("nothing to copy"),
    }
}

fn apply_css(theme: &ThemeConfig) {
    let css = format!(
        r#"
        window {{
            background-color: {};
        }}

        .output {{
            background-color: {};
            padding: 12px;
            min-height: 110px;
        }}

        .previous-operand {{
            color: rgba(255, 255, 255, 0.6);
            font-size: {}pt;
        }}

        .current-operand {{
            color: {};
            font-size: {}pt;
        }}

        .keypad button {{
            background-image: none;
            background-color: {};
            color: #111111;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: {}px;
            font-size: {}pt;
            transition: background-color 0.15s ease;
        }}

        .keypad button:hover {{
            background-color: rgba(255, 255, 255, 0.9);
        }}

        .keypad button.operator {{
            background-color: {};
            color: {};
        }}

        .keypad button.operator:hover {{
            background-color: {};
        }}
        "#,
        theme.background_color,     // window background
        theme.display_color,        // output panel
        theme.font_size,            // previous-operand font-size
        theme.text_color,           // current-operand color
        theme.display_font_size,    // current-operand font-size
        theme.button_color,         // button background
        theme.border_radius,        // button border-radius
        theme.font_size,            // button font-size
        theme.operator_color,       // operator background
        theme.text_color,           // operator color
        theme.accent_color,         // operator hover
    );

    let provider = gtk::CssProvider::new();
    provider.load_from_string(&css);
    match gdk::Display::default() {
        Some(display) => gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => tracing::warn!("no default display, theme not applied"),
    }
}
