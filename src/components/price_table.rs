use crate::models::market::PriceQuote;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PriceTableProps {
    pub quotes: Vec<PriceQuote>,
    #[prop_or("No prices available".to_string())]
    pub empty_message: String,
}

/// Wholesale and retail prices per vegetable, Pettah beside Dambulla.
#[function_component(PriceTable)]
pub fn price_table(props: &PriceTableProps) -> Html {
    if props.quotes.is_empty() {
        return html! {
            <p class="price-table-empty">{&props.empty_message}</p>
        };
    }

    html! {
        <table class="price-table">
            <thead>
                <tr class="price-table-group">
                    <th></th>
                    <th colspan="2">{"Wholesale Prices"}</th>
                    <th colspan="2">{"Retail Prices"}</th>
                </tr>
                <tr class="price-table-markets">
                    <th>{"Vegetable"}</th>
                    <th>{"Pettah"}</th>
                    <th>{"Dambulla"}</th>
                    <th>{"Pettah"}</th>
                    <th>{"Dambulla"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.quotes.iter().enumerate().map(|(idx, quote)| {
                        let row_class = if idx % 2 == 0 { "row-even" } else { "row-odd" };
                        let [name, cells @ ..] = quote.cells();
                        html! {
                            <tr class={row_class}>
                                <td class="vegetable">{name}</td>
                                { for cells.into_iter().map(|cell| {
                                    let class = if cell == "N/A" { "price missing" } else { "price" };
                                    html! { <td {class}>{cell}</td> }
                                }) }
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
