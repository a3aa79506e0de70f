mod deposit_form;
mod payment_form;
