use super::error::AlertError;
use super::types::{AlertBinding, AlertOptions, BoundTarget};
use super::validation;
use crate::platform::Platform;
use crate::ports::{DocumentPort, ElementPort, ModalPort, ModalToolkitPort};
use crate::time_it;

pub fn bind<D, T>(
    platform: &Platform,
    document: &D,
    toolkit: &T,
    selector: &str,
    options: AlertOptions,
) -> Result<AlertBinding<D::Element, T::Modal>, AlertError>
where
    D: DocumentPort,
    T: ModalToolkitPort<D::Element>,
{
    validation::validate_selector(selector)?;

    let target = match document.find(selector)? {
        Some(container) => {
            let modal = toolkit.attach(&container)?;
            Some(BoundTarget { container, modal })
        }
        None => {
            // Late failure semantics: the unresolved selector is only an
            // error once show() needs it.
            platform
                .logger()
                .warn(&format!("no element matches {selector}; show() will fail"));
            None
        }
    };

    Ok(AlertBinding {
        selector: selector.to_string(),
        options,
        target,
    })
}

pub fn show<E, M>(
    platform: &Platform,
    binding: &AlertBinding<E, M>,
    message: &str,
) -> Result<(), AlertError>
where
    E: ElementPort,
    M: ModalPort,
{
    let target = match binding.target.as_ref() {
        Some(target) => target,
        None => {
            platform
                .logger()
                .error(&format!("cannot show alert: {} is not bound", binding.selector));
            return Err(AlertError::target_not_found(&binding.selector));
        }
    };

    let body = match target.container.find(&binding.options.body_selector)? {
        Some(body) => body,
        None => {
            platform.logger().error(&format!(
                "cannot show alert: {} has no {} element",
                binding.selector, binding.options.body_selector
            ));
            return Err(AlertError::target_not_found(&binding.options.body_selector));
        }
    };

    body.set_text(message);

    time_it!("alert_modal.show", target.modal.show());

    Ok(())
}
