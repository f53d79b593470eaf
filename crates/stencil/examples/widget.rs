//! A user-defined target type with its own blueprints and factory helpers.

use stencil::{BluePrint, BluePrintFactory, Build};

#[derive(Debug, Clone, PartialEq)]
struct Widget {
    margins: [u32; 4],
    title: String,
}

/// Resets margins and keeps everything else.
struct DefaultMargins;

impl BluePrint for DefaultMargins {
    type Base = Widget;

    fn instantiate(&self) -> Widget {
        Widget {
            margins: [8; 4],
            title: String::new(),
        }
    }

    fn apply(&self, widget: &mut Widget) {
        widget.margins = [8; 4];
    }
}

/// A titled widget with no margins.
struct Titled(&'static str);

impl BluePrint for Titled {
    type Base = Widget;

    fn instantiate(&self) -> Widget {
        Widget {
            margins: [0; 4],
            title: self.0.to_string(),
        }
    }

    fn apply(&self, widget: &mut Widget) {
        widget.margins = [0; 4];
        widget.title.clear();
        widget.title.push_str(self.0);
    }
}

stencil::assert_blueprint!(DefaultMargins => Widget);
stencil::assert_blueprint!(Titled => Widget);

trait WidgetBluePrints {
    fn default_margins() -> DefaultMargins {
        DefaultMargins
    }

    fn titled(title: &'static str) -> Titled {
        Titled(title)
    }
}

impl WidgetBluePrints for BluePrintFactory<Widget> {}

fn main() {
    stencil::init_logger!();

    let mut widget = Widget::build(&BluePrintFactory::<Widget>::titled("settings"));
    log::info!("built {:?}", widget);

    widget.margins = [1, 2, 3, 4];
    widget.configure(&BluePrintFactory::<Widget>::default_margins());
    log::info!("reconfigured {:?}", widget);
}
