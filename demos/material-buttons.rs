use cushy::figures::units::Lp;
use cushy::kludgine::Color;
use cushy::value::{Destination, Dynamic};
use cushy::widget::MakeWidget;
use cushy::Run;
use cushy_material_button::MaterialButton;

fn main() -> cushy::Result {
    let clicked = Dynamic::new(String::from("Press a button"));
    let save_clicked = clicked.clone();
    let delete_clicked = clicked.clone();

    clicked
        .and(
            MaterialButton::new("Save")
                .on_click(move || save_clicked.set(String::from("Saved")))
                .and(
                    MaterialButton::new("Delete")
                        .background_color(Color::RED)
                        .corner_radius(Lp::points(12))
                        .on_click(move || delete_clicked.set(String::from("Deleted"))),
                )
                .into_columns(),
        )
        .into_rows()
        .centered()
        .run()
}
