pub(crate) mod text_effect;
