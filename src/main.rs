use people_view::PersonListView;

fn main() {
    yew::Renderer::<PersonListView>::new().render();
}
