use leptos::prelude::*;

const COLUMNS: [(&str, &[&str]); 3] = [
    ("Use cases", &["Personal websites", "Small businesses", "Corporations", "Students"]),
    ("Resources", &["Tutorials", "Client use cases", "Documentation"]),
    ("Contact", &["Email", "LinkedIn", "Instagram", "Support"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-50 p-8 pb-24">
            <div class="container mx-auto flex items-start">
                <div class="flex flex-col space-y-4">
                    <img src="/assets/mascot.svg" alt="Logo" class="h-14 w-14" />
                </div>

                <div class="flex-1 flex justify-center space-x-40">
                    {COLUMNS.iter().map(|(title, items)| view! {
                        <div>
                            <h3 class="text-[#837FFC] font-semibold">{*title}</h3>
                            <ul class="mt-2 space-y-2">
                                {items.iter().map(|item| view! {
                                    <li class="text-gray-700">{*item}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
