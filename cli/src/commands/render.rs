use netforms_core::{
    AddressInput, Attrs, CidrAddressField, FormField, InetAddressField, MacAddressField,
};

use crate::commands::{FieldKind, RenderArgs};

pub fn render(args: RenderArgs) -> String {
    let attrs: Attrs = args.attrs.into_iter().collect();

    match args.field {
        FieldKind::Inet => markup(&InetAddressField::default(), &args.name, args.value, &attrs),
        FieldKind::Cidr => markup(&CidrAddressField::default(), &args.name, args.value, &attrs),
        FieldKind::Mac => markup(&MacAddressField::default(), &args.name, args.value, &attrs),
    }
}

fn markup<F: FormField>(field: &F, name: &str, value: Option<String>, attrs: &Attrs) -> String {
    let input: AddressInput<F::Value> = value.into();
    field.render(name, &input, attrs)
}
