//! OApp contract bindings
//!
//! Only the configuration surface the wiring plan calls is bound here: peer
//! registration, enforced options, delegate and ownership.

use alloy_sol_types::sol;

sol! {
    /// Argument of `setEnforcedOptions`
    struct EnforcedOptionParam {
        uint32 eid;
        uint16 msgType;
        bytes options;
    }

    interface IOApp {
        function setPeer(uint32 _eid, bytes32 _peer) external;
        function setEnforcedOptions(EnforcedOptionParam[] calldata _enforcedOptions) external;
        function setDelegate(address _delegate) external;
        function transferOwnership(address newOwner) external;
    }
}
