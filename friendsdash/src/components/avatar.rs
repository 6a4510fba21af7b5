use yew::{
    prelude::*,
    function_component,
    html,
};

use model::User;

#[derive(PartialEq, Clone, Copy, Default)]
pub enum AvatarSize {
    #[default]
    Small,
    Large,
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub user: Option<User>,
    #[prop_or_default]
    pub size: AvatarSize,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let (class, icon_size) = match props.size {
        AvatarSize::Small => ("image is-32x32 avatar", "18"),
        AvatarSize::Large => ("image is-96x96 avatar", "48"),
    };

    let picture = props.user.as_ref()
        .and_then(|u| u.avatar.clone().map(|src| (src, u.name.clone())));

    html! {
        <figure {class}>
            {
                match picture {
                    Some((src, alt)) => html! {
                        <img class="is-rounded" {src} {alt} />
                    },
                    None => html! {
                        <div class="avatar-placeholder is-flex is-justify-content-center is-align-items-center">
                            <yew_feather::User size={icon_size} />
                        </div>
                    },
                }
            }
        </figure>
    }
}
